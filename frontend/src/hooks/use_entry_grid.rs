use std::rc::Rc;

use shared::{
    ApiError, CellRange, EntryGrid, LoadGeneration, LoadTicket, RangeResponse, RawTable,
    SalesField, SavePlan, SheetId, NOTHING_TO_SAVE_NOTICE, SAVED_NOTICE,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::Notifier;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Debug, PartialEq)]
pub enum GridAction {
    Load(RawTable),
    Clear,
    Edit(usize, SalesField, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridModel {
    pub grid: EntryGrid,
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            grid: EntryGrid::new(),
        }
    }
}

impl Reducible for GridModel {
    type Action = GridAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut grid = self.grid.clone();
        match action {
            GridAction::Load(table) => grid.load(&table),
            GridAction::Clear => grid.clear(),
            GridAction::Edit(index, field, value) => grid.set(index, field, &value),
        }
        Rc::new(Self { grid })
    }
}

/// What a finished grid load does to the page.
#[derive(Debug, PartialEq)]
pub enum GridLoaded {
    Apply(GridAction),
    Failed { notice: String, error: ApiError },
}

/// Settle a grid load. Loads overtaken by a newer one, or by unmount, yield
/// nothing; a failure leaves the already cleared grid alone.
pub fn on_grid_loaded(
    result: Result<RangeResponse, ApiError>,
    ticket: &LoadTicket,
) -> Option<GridLoaded> {
    if !ticket.is_current() {
        return None;
    }
    Some(match result {
        Ok(response) => GridLoaded::Apply(GridAction::Load(response.values)),
        Err(error) => GridLoaded::Failed {
            notice: error.load_notice(),
            error,
        },
    })
}

#[derive(Clone, PartialEq)]
pub struct UseEntryGridActions {
    pub edit: Callback<(usize, SalesField, String)>,
    pub clear: Callback<()>,
    pub save: Callback<()>,
}

pub struct UseEntryGridResult {
    pub grid: EntryGrid,
    pub loading: bool,
    pub saving: bool,
    pub actions: UseEntryGridActions,
}

/// Entry grid bound to one sheet: loads the sheet's rows when the sheet
/// changes and saves the filled rows back on request.
#[hook]
pub fn use_entry_grid(api_client: &ApiClient, sheet: &SheetId, notifier: &Notifier) -> UseEntryGridResult {
    let model = use_reducer(GridModel::default);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let generation = use_memo((), |_| LoadGeneration::new());

    // Load on sheet change
    {
        let dispatcher = model.dispatcher();
        let loading = loading.clone();
        let api_client = api_client.clone();
        let notifier = notifier.clone();

        use_effect_with(sheet.clone(), move |sheet| {
            let ticket = generation.begin();
            dispatcher.dispatch(GridAction::Clear);
            loading.set(true);

            let sheet = sheet.clone();
            spawn_local(async move {
                let result = api_client.fetch_range(&sheet, &CellRange::entry_grid()).await;
                let Some(outcome) = on_grid_loaded(result, &ticket) else {
                    return;
                };

                match outcome {
                    GridLoaded::Apply(action) => {
                        Logger::debug_with_component(
                            "use_entry_grid",
                            &format!("Loaded sheet {}", sheet),
                        );
                        dispatcher.dispatch(action);
                    }
                    GridLoaded::Failed { notice, error } => {
                        Logger::error_with_component(
                            "use_entry_grid",
                            &format!("Failed to load sheet {}: {}", sheet, error),
                        );
                        notifier.error(notice);
                    }
                }
                loading.set(false);
            });

            move || generation.cancel()
        });
    }

    let edit = {
        let dispatcher = model.dispatcher();
        Callback::from(move |(index, field, value): (usize, SalesField, String)| {
            dispatcher.dispatch(GridAction::Edit(index, field, value));
        })
    };

    let clear = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GridAction::Clear))
    };

    let save = {
        let grid = model.grid.clone();
        let saving = saving.clone();
        let api_client = api_client.clone();
        let sheet = sheet.clone();
        let notifier = notifier.clone();

        Callback::from(move |_| match grid.save_plan() {
            SavePlan::NothingToSave => notifier.info(NOTHING_TO_SAVE_NOTICE),
            SavePlan::Submit(rows) => {
                let saving = saving.clone();
                let api_client = api_client.clone();
                let sheet = sheet.clone();
                let notifier = notifier.clone();

                saving.set(true);
                spawn_local(async move {
                    match api_client.save_rows(&sheet, rows).await {
                        Ok(response) => {
                            Logger::info_with_component(
                                "use_entry_grid",
                                &format!("Saved {} rows to sheet {}", response.saved, sheet),
                            );
                            notifier.success(SAVED_NOTICE);
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                "use_entry_grid",
                                &format!("Failed to save sheet {}: {}", sheet, e),
                            );
                            notifier.error(e.save_notice());
                        }
                    }
                    saving.set(false);
                });
            }
        })
    };

    UseEntryGridResult {
        grid: model.grid.clone(),
        loading: *loading,
        saving: *saving,
        actions: UseEntryGridActions { edit, clear, save },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{raw_table, ErrorCode, SHEET_NOT_FOUND_NOTICE};

    fn response(values: RawTable) -> RangeResponse {
        RangeResponse {
            sheet: "051025".into(),
            range: "A2:E31".into(),
            values,
        }
    }

    #[test]
    fn test_overtaken_load_is_dropped() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        let _second = generation.begin();

        let outcome = on_grid_loaded(Ok(response(raw_table![["1", "HH"]])), &first);
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_load_after_unmount_is_dropped() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        generation.cancel();

        let error = ApiError::new(ErrorCode::Network, "offline");
        assert_eq!(on_grid_loaded(Err(error), &ticket), None);
    }

    #[test]
    fn test_missing_sheet_notifies_and_leaves_grid_empty() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        let error = ApiError::new(ErrorCode::SheetNotFound, "sheet 051025 not found")
            .with_upstream_status(404);

        let outcome = on_grid_loaded(Err(error.clone()), &ticket);
        assert_eq!(
            outcome,
            Some(GridLoaded::Failed {
                notice: SHEET_NOT_FOUND_NOTICE.to_string(),
                error,
            })
        );

        // The grid was cleared when the load began and nothing is applied
        let model = Rc::new(GridModel::default()).reduce(GridAction::Clear);
        assert_eq!(model.grid.last_filled_index(), None);
        assert!(model.grid.rows().iter().all(|row| !row.is_filled()));
    }

    #[test]
    fn test_current_load_applies_values() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        let values = raw_table![["3", "LN", "18", "Cash", "1"]];

        let outcome = on_grid_loaded(Ok(response(values.clone())), &ticket);
        assert_eq!(outcome, Some(GridLoaded::Apply(GridAction::Load(values))));
    }

    #[test]
    fn test_edit_then_clear() {
        let model = Rc::new(GridModel::default());
        let model = model.reduce(GridAction::Edit(2, SalesField::Amount, "12.50".into()));
        assert_eq!(model.grid.last_filled_index(), Some(2));

        let model = model.reduce(GridAction::Clear);
        assert_eq!(model.grid, EntryGrid::new());
    }

    #[test]
    fn test_load_replaces_grid() {
        let model = Rc::new(GridModel::default());
        let model = model.reduce(GridAction::Edit(5, SalesField::Covers, "3".into()));
        let model = model.reduce(GridAction::Load(raw_table![["7", "D", "40", "Visa", "2"]]));

        assert_eq!(model.grid.last_filled_index(), Some(0));
        assert_eq!(model.grid.row(0).map(|r| r.text(SalesField::Payment)), Some("Visa".to_string()));
        assert!(model.grid.row(5).map(|r| !r.is_filled()).unwrap_or(false));
    }
}
