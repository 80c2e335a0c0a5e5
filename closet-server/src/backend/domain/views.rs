//! Cached screen view models and their re-render rules.
//!
//! Each screen is a pure function of the wardrobe, the outfit ledger and the
//! current selection. The synchronizer keeps the last rendered copy of every
//! screen and re-renders only the ones that read a changed collection:
//!
//! | View     | Reads             | Re-rendered on                       |
//! |----------|-------------------|--------------------------------------|
//! | Home     | wardrobe, outfits | any mutation, selected date          |
//! | Closet   | wardrobe          | wardrobe mutation, filter/sort       |
//! | Calendar | wardrobe, outfits | any mutation, selected date          |

use chrono::{Local, NaiveDate};
use log::debug;
use shared::{CalendarView, CategoryBadge, ChecklistEntry, ClosetView, HomeView, ItemCard};

use crate::backend::domain::calendar::CalendarService;
use crate::backend::domain::closet_store::Change;
use crate::backend::domain::models::{ClothingItem, ItemFilter, ItemSort, OutfitLedger, Wardrobe};
use crate::backend::domain::recommendation::{recommend, DEFAULT_RECOMMENDATION_LIMIT};
use crate::backend::io::rest::mappers::outfit_mapper::OutfitMapper;

pub const NO_OUTFIT_TODAY: &str = "まだ記録されていません";
pub const NO_RECOMMENDATIONS: &str = "服を登録してください";
pub const EMPTY_CLOSET: &str = "服を追加してください";
pub const NO_MATCHING_ITEMS: &str = "該当する服がありません";
pub const NO_OUTFIT_ON_DATE: &str = "この日は記録がありません";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub recommendation_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

/// UI selection state. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    pub closet_filter: ItemFilter,
    pub closet_sort: ItemSort,
}

impl Selection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            closet_filter: ItemFilter::All,
            closet_sort: ItemSort::default(),
        }
    }
}

pub fn item_card(item: &ClothingItem) -> ItemCard {
    ItemCard {
        id: item.id.clone(),
        name: item.name.clone(),
        category: CategoryBadge {
            key: item.category.key().to_string(),
            label: item.category.label().to_string(),
            style: item.category.style().to_string(),
        },
        color: item.color.clone(),
        image: item.image.as_ref().map(|image| image.as_str().to_string()),
    }
}

fn empty_message(is_empty: bool, message: &str) -> Option<String> {
    is_empty.then(|| message.to_string())
}

pub fn render_home(wardrobe: &Wardrobe, ledger: &OutfitLedger, selection: &Selection, limit: usize) -> HomeView {
    let outfit: Vec<ItemCard> = ledger
        .resolve(selection.date, wardrobe)
        .into_iter()
        .map(item_card)
        .collect();
    let recommendations: Vec<ItemCard> = recommend(wardrobe.items(), ledger, limit)
        .into_iter()
        .map(item_card)
        .collect();

    HomeView {
        revision: 0,
        selected_date: OutfitMapper::format_date(selection.date),
        outfit_empty_message: empty_message(outfit.is_empty(), NO_OUTFIT_TODAY),
        outfit,
        recommendations_empty_message: empty_message(recommendations.is_empty(), NO_RECOMMENDATIONS),
        recommendations,
    }
}

pub fn render_closet(wardrobe: &Wardrobe, selection: &Selection) -> ClosetView {
    let items: Vec<ItemCard> = wardrobe
        .list(&selection.closet_filter, selection.closet_sort)
        .iter()
        .map(item_card)
        .collect();
    let empty_message = if wardrobe.is_empty() {
        Some(EMPTY_CLOSET.to_string())
    } else {
        empty_message(items.is_empty(), NO_MATCHING_ITEMS)
    };

    ClosetView {
        revision: 0,
        filter: selection.closet_filter.key().to_string(),
        sort: selection.closet_sort.key().to_string(),
        items,
        total_items: wardrobe.len(),
        empty_message,
    }
}

pub fn render_calendar(
    wardrobe: &Wardrobe,
    ledger: &OutfitLedger,
    selection: &Selection,
    today: NaiveDate,
    calendar: &CalendarService,
) -> CalendarView {
    let outfit: Vec<ItemCard> = ledger
        .resolve(selection.date, wardrobe)
        .into_iter()
        .map(item_card)
        .collect();
    let checklist: Vec<ChecklistEntry> = wardrobe
        .items()
        .iter()
        .map(|item| ChecklistEntry {
            item: item_card(item),
            checked: ledger.is_assigned(selection.date, &item.id),
        })
        .collect();

    CalendarView {
        revision: 0,
        selected_date: OutfitMapper::format_date(selection.date),
        outfit_empty_message: empty_message(outfit.is_empty(), NO_OUTFIT_ON_DATE),
        outfit,
        checklist_empty_message: empty_message(checklist.is_empty(), EMPTY_CLOSET),
        checklist,
        month: calendar.month_containing(selection.date, ledger, today, Some(selection.date)),
    }
}

pub struct ViewSynchronizer {
    config: ViewConfig,
    selection: Selection,
    pinned_today: Option<NaiveDate>,
    calendar: CalendarService,
    home: HomeView,
    closet: ClosetView,
    calendar_view: CalendarView,
}

impl ViewSynchronizer {
    pub fn new(config: ViewConfig) -> Self {
        Self::build(config, None)
    }

    /// Fix "today" instead of reading the local clock. The selection starts on that date.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self::build(self.config, Some(today))
    }

    fn build(config: ViewConfig, pinned_today: Option<NaiveDate>) -> Self {
        let calendar = CalendarService::new();
        let today = pinned_today.unwrap_or_else(|| Local::now().date_naive());
        let selection = Selection::new(today);
        let (wardrobe, ledger) = (Wardrobe::default(), OutfitLedger::default());

        Self {
            home: render_home(&wardrobe, &ledger, &selection, config.recommendation_limit),
            closet: render_closet(&wardrobe, &selection),
            calendar_view: render_calendar(&wardrobe, &ledger, &selection, today, &calendar),
            config,
            selection,
            pinned_today,
            calendar,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    pub fn home(&self) -> &HomeView {
        &self.home
    }

    pub fn closet(&self) -> &ClosetView {
        &self.closet
    }

    pub fn calendar(&self) -> &CalendarView {
        &self.calendar_view
    }

    pub fn render_all(&mut self, wardrobe: &Wardrobe, ledger: &OutfitLedger) {
        self.refresh_home(wardrobe, ledger);
        self.refresh_closet(wardrobe);
        self.refresh_calendar(wardrobe, ledger);
    }

    /// Re-render the views that read a changed collection
    pub fn sync(&mut self, change: Change, wardrobe: &Wardrobe, ledger: &OutfitLedger) {
        if change.is_none() {
            return;
        }
        self.refresh_home(wardrobe, ledger);
        self.refresh_calendar(wardrobe, ledger);
        if change.wardrobe {
            self.refresh_closet(wardrobe);
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, wardrobe: &Wardrobe, ledger: &OutfitLedger) {
        self.selection.date = date;
        self.refresh_home(wardrobe, ledger);
        self.refresh_calendar(wardrobe, ledger);
    }

    /// Change the closet filter and/or sort; `None` keeps the current value
    pub fn set_closet_filter(&mut self, filter: Option<ItemFilter>, sort: Option<ItemSort>, wardrobe: &Wardrobe) {
        if let Some(filter) = filter {
            self.selection.closet_filter = filter;
        }
        if let Some(sort) = sort {
            self.selection.closet_sort = sort;
        }
        self.refresh_closet(wardrobe);
    }

    fn refresh_home(&mut self, wardrobe: &Wardrobe, ledger: &OutfitLedger) {
        let revision = self.home.revision + 1;
        self.home = HomeView {
            revision,
            ..render_home(wardrobe, ledger, &self.selection, self.config.recommendation_limit)
        };
        debug!("🏠 Rendered home view (revision {})", revision);
    }

    fn refresh_closet(&mut self, wardrobe: &Wardrobe) {
        let revision = self.closet.revision + 1;
        self.closet = ClosetView {
            revision,
            ..render_closet(wardrobe, &self.selection)
        };
        debug!("👗 Rendered closet view (revision {})", revision);
    }

    fn refresh_calendar(&mut self, wardrobe: &Wardrobe, ledger: &OutfitLedger) {
        let revision = self.calendar_view.revision + 1;
        let today = self.today();
        self.calendar_view = CalendarView {
            revision,
            ..render_calendar(wardrobe, ledger, &self.selection, today, &self.calendar)
        };
        debug!("🗓️ Rendered calendar view (revision {})", revision);
    }
}
