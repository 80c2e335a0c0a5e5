use log::info;
use shared::{CalendarView, ClosetView, HomeView};

use crate::backend::domain::closet_store::ClosetStore;
use crate::backend::domain::models::{ClosetError, ClosetResult, ItemFilter, ItemSort};
use crate::backend::domain::outfit_service::parse_outfit_date;

/// Access to the cached screen views and the selection that drives them
#[derive(Clone)]
pub struct ViewService {
    store: ClosetStore,
}

impl ViewService {
    pub fn new(store: ClosetStore) -> Self {
        Self { store }
    }

    pub fn home(&self) -> HomeView {
        self.store.read(|snapshot| snapshot.views.home().clone())
    }

    pub fn closet(&self) -> ClosetView {
        self.store.read(|snapshot| snapshot.views.closet().clone())
    }

    pub fn calendar(&self) -> CalendarView {
        self.store.read(|snapshot| snapshot.views.calendar().clone())
    }

    /// Move the selected date; home and calendar follow it
    pub fn select_date(&self, date: &str) -> ClosetResult<CalendarView> {
        let date = parse_outfit_date(date)?;
        info!("📅 Selected date: {}", date);

        Ok(self.store.update_views(|views, wardrobe, ledger| {
            views.select_date(date, wardrobe, ledger);
            views.calendar().clone()
        }))
    }

    /// Change the closet filter and/or sort order
    pub fn set_closet_filter(&self, category: Option<&str>, sort: Option<&str>) -> ClosetResult<ClosetView> {
        let filter = category.map(ItemFilter::parse);
        let sort = match sort {
            Some(raw) => Some(
                ItemSort::parse(raw)
                    .ok_or_else(|| ClosetError::validation(format!("Unknown sort order: '{}'", raw)))?,
            ),
            None => None,
        };

        Ok(self.store.update_views(|views, wardrobe, _| {
            views.set_closet_filter(filter, sort, wardrobe);
            views.closet().clone()
        }))
    }
}
