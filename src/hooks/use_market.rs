use chrono::{DateTime, Utc};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{error::AppError, market::MarketData};
use crate::services::api::{ApiConfig, MarketClient};

#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(DateTime<Utc>),
    Failed(String),
}

impl LoadState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub const fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Loaded(at) => Some(*at),
            _ => None,
        }
    }
}

pub enum MarketAction {
    /// A load with this ticket has been issued.
    Started(u64),
    Completed {
        ticket: u64,
        result: Result<MarketData, AppError>,
        at: DateTime<Utc>,
    },
}

/// Load lifecycle plus the last successfully loaded snapshot.
///
/// Tables are only ever replaced wholesale by a successful load, so a failed
/// refresh keeps showing the previous data next to the error.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MarketState {
    pub load: LoadState,
    pub data: Rc<MarketData>,
    latest_ticket: u64,
}

impl MarketState {
    /// Whether a result for `ticket` would still be applied.
    pub const fn is_current(&self, ticket: u64) -> bool {
        ticket >= self.latest_ticket
    }

    /// Next state after `action`, or `None` when a response from a superseded load arrives.
    pub fn apply(&self, action: MarketAction) -> Option<Self> {
        match action {
            MarketAction::Started(ticket) => Some(Self {
                load: LoadState::Loading,
                data: self.data.clone(),
                latest_ticket: ticket.max(self.latest_ticket),
            }),
            MarketAction::Completed { ticket, .. } if !self.is_current(ticket) => None,
            MarketAction::Completed { result, at, .. } => Some(match result {
                Ok(data) => Self {
                    load: LoadState::Loaded(at),
                    data: Rc::new(data),
                    latest_ticket: self.latest_ticket,
                },
                Err(e) => Self {
                    load: LoadState::Failed(e.load_message()),
                    data: self.data.clone(),
                    latest_ticket: self.latest_ticket,
                },
            }),
        }
    }
}

impl Reducible for MarketState {
    type Action = MarketAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        self.apply(action).map_or(self, Rc::new)
    }
}

/// Handle returned by `use_market_data`
#[derive(Clone, PartialEq)]
pub struct MarketHandle {
    pub state: UseReducerHandle<MarketState>,
    pub refresh: Callback<()>,
}

/// Loads market data on mount and again whenever `refresh` is emitted.
///
/// There is no automatic retry; a failed load stays failed until the user asks again.
#[hook]
pub fn use_market_data(config: ApiConfig) -> MarketHandle {
    let state = use_reducer(MarketState::default);
    let trigger = use_state(|| 0u32);
    let latest = use_mut_ref(|| 0u64);

    {
        let dispatcher = state.dispatcher();
        let latest = latest.clone();

        use_effect_with((*trigger, config), move |(_, config)| {
            let ticket = {
                let mut latest = latest.borrow_mut();
                *latest += 1;
                *latest
            };
            let config = config.clone();

            dispatcher.dispatch(MarketAction::Started(ticket));
            gloo::console::log!(format!("Loading market data (request #{ticket})"));

            spawn_local(async move {
                let result = match MarketClient::with_config(config) {
                    Ok(client) => client.load().await,
                    Err(e) => Err(e),
                };

                let newest = *latest.borrow();
                if newest != ticket {
                    gloo::console::warn!(format!(
                        "Discarding response #{ticket}; request #{newest} is newer"
                    ));
                }
                log_outcome(&result);

                dispatcher.dispatch(MarketAction::Completed {
                    ticket,
                    result,
                    at: Utc::now(),
                });
            });

            || () // Cleanup
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    MarketHandle { state, refresh }
}

fn log_outcome(result: &Result<MarketData, AppError>) {
    match result {
        Ok(data) => {
            gloo::console::log!(format!(
                "Market data loaded: {} inventory, {} price, {} unit-price rows",
                data.inventory.len(),
                data.prices.len(),
                data.avg_prices.len()
            ));
            let inconsistent = data.inconsistent_districts();
            if !inconsistent.is_empty() {
                gloo::console::warn!(format!(
                    "Inventory totals disagree with room counts for: {}",
                    inconsistent.join(", ")
                ));
            }
        }
        Err(e) => gloo::console::error!(format!("Market data load failed: {e}")),
    }
}
