use chrono::NaiveDate;
use log::info;
use shared::{CalendarMonth, CurrentDateResponse};

use crate::backend::domain::calendar::CalendarService;
use crate::backend::domain::closet_store::{Change, ClosetStore};
use crate::backend::domain::commands::outfits::{OutfitItemCommand, OutfitResult};
use crate::backend::domain::models::{ClosetError, ClosetResult, ClothingItem};
use crate::backend::io::rest::mappers::outfit_mapper::OutfitMapper;

pub fn parse_outfit_date(value: &str) -> ClosetResult<NaiveDate> {
    OutfitMapper::parse_date(value)
        .ok_or_else(|| ClosetError::validation(format!("Invalid date: '{}' (expected YYYY-MM-DD)", value)))
}

/// Service for the per-date outfit records
#[derive(Clone)]
pub struct OutfitService {
    store: ClosetStore,
    calendar: CalendarService,
}

impl OutfitService {
    pub fn new(store: ClosetStore) -> Self {
        Self {
            store,
            calendar: CalendarService::new(),
        }
    }

    /// Flip whether an item was worn on a date
    pub fn toggle_outfit(&self, command: OutfitItemCommand) -> ClosetResult<OutfitResult> {
        let date = parse_outfit_date(&command.date)?;
        info!("🔁 Toggling item {} on {}", command.item_id, date);

        self.store.mutate(|wardrobe, ledger| {
            if !wardrobe.contains(&command.item_id) {
                return Err(ClosetError::item_not_found(&command.item_id));
            }
            let assigned = ledger.toggle(date, &command.item_id);
            let items = ledger.resolve(date, wardrobe).into_iter().cloned().collect();
            Ok((
                OutfitResult { date, items, assigned, changed: true },
                Change::OUTFITS,
            ))
        })
    }

    /// Mark an item as worn on a date. Writes only if it was not already there.
    pub fn wear_item(&self, command: OutfitItemCommand) -> ClosetResult<OutfitResult> {
        let date = parse_outfit_date(&command.date)?;
        info!("👗 Wearing item {} on {}", command.item_id, date);

        self.store.mutate(|wardrobe, ledger| {
            if !wardrobe.contains(&command.item_id) {
                return Err(ClosetError::item_not_found(&command.item_id));
            }
            let changed = ledger.assign(date, &command.item_id);
            let items = ledger.resolve(date, wardrobe).into_iter().cloned().collect();
            let change = if changed { Change::OUTFITS } else { Change::NONE };
            Ok((
                OutfitResult { date, items, assigned: true, changed },
                change,
            ))
        })
    }

    /// Items worn on a date, in wardrobe order, with the parsed date
    pub fn get_outfit(&self, date: &str) -> ClosetResult<(NaiveDate, Vec<ClothingItem>)> {
        let date = parse_outfit_date(date)?;
        let items = self.store.read(|snapshot| {
            snapshot
                .ledger
                .resolve(date, snapshot.wardrobe)
                .into_iter()
                .cloned()
                .collect()
        });
        Ok((date, items))
    }

    /// Every assignment across all dates; an item worn on two dates appears twice
    pub fn all_assigned_ids(&self) -> Vec<String> {
        self.store.read(|snapshot| {
            snapshot
                .ledger
                .all_assigned_ids()
                .into_iter()
                .map(str::to_string)
                .collect()
        })
    }

    pub fn assigned_dates(&self) -> Vec<NaiveDate> {
        self.store.read(|snapshot| snapshot.ledger.assigned_dates().collect())
    }

    pub fn calendar_month(&self, month: u32, year: i32) -> ClosetResult<CalendarMonth> {
        self.store.read(|snapshot| {
            self.calendar.generate_calendar_month(
                month,
                year,
                snapshot.ledger,
                snapshot.views.today(),
                Some(snapshot.views.selection().date),
            )
        })
    }

    pub fn current_date(&self) -> CurrentDateResponse {
        let today = self.store.read(|snapshot| snapshot.views.today());
        self.calendar.current_date(today)
    }
}
