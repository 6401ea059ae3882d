use crate::api::{ApiClient, BalanceRecord, TransactionSignature};
use crate::config::Config;
use crate::error::{LookupError, RequestFailure};
use tracing::debug;
use tui_input::Input;

/// Offered on the empty screens so there is something to try
pub const EXAMPLE_ADDRESS: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Balance,
    Transactions,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::Transactions => "Transactions",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Balance => Self::Transactions,
            Self::Transactions => Self::Balance,
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            Self::Balance => "Fetching balance...",
            Self::Transactions => "Loading transactions...",
        }
    }
}

/// Where the lookup cycle currently is.
///
/// `Loading` remembers which operation is in flight and under which
/// generation, so a late answer to an older request can be recognised.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading { operation: Tab, generation: u64 },
    Success { operation: Tab },
    Failed { error: LookupError },
}

/// A lookup the event loop should run against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub operation: Tab,
    pub address: String,
}

impl LookupRequest {
    pub async fn run(self, client: &ApiClient) -> LookupOutcome {
        let result = match self.operation {
            Tab::Balance => client
                .fetch_balance(&self.address)
                .await
                .map(LookupData::Balance),
            Tab::Transactions => client
                .fetch_transactions(&self.address)
                .await
                .map(LookupData::Transactions),
        };

        LookupOutcome {
            generation: self.generation,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupData {
    Balance(BalanceRecord),
    Transactions(Vec<TransactionSignature>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub generation: u64,
    pub result: Result<LookupData, RequestFailure>,
}

/// What the body of the active tab shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent<'a> {
    Loading(&'static str),
    Balance(&'a BalanceRecord),
    Transactions {
        shown: &'a [TransactionSignature],
        total: usize,
        selected: usize,
    },
    NoTransactions,
    GetStarted(Tab),
}

pub struct App {
    pub config: Config,
    pub address_input: Input,
    pub active_tab: Tab,
    pub status: LookupStatus,
    pub balance: Option<BalanceRecord>,
    pub transactions: Vec<TransactionSignature>,
    pub selected_tx: usize,
    pub should_quit: bool,
    generation: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            address_input: Input::default(),
            active_tab: Tab::default(),
            status: LookupStatus::Idle,
            balance: None,
            transactions: Vec::new(),
            selected_tx: 0,
            should_quit: false,
            generation: 0,
        }
    }

    pub fn address(&self) -> &str {
        self.address_input.value()
    }

    pub fn set_address(&mut self, address: &str) {
        self.address_input = Input::new(address.to_string());
    }

    /// "Try example address": fills the field, fetches nothing
    pub fn use_example_address(&mut self) {
        self.set_address(EXAMPLE_ADDRESS);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LookupStatus::Loading { .. })
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.status {
            LookupStatus::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Switch tabs. Never triggers a fetch on its own.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    /// Start a lookup for the active tab.
    ///
    /// Returns `None` while a request is in flight, or when the address is
    /// blank (which sets the validation error instead).
    pub fn submit(&mut self) -> Option<LookupRequest> {
        if self.is_loading() {
            return None;
        }

        let address = self.address().trim().to_string();
        if address.is_empty() {
            self.status = LookupStatus::Failed {
                error: LookupError::EmptyAddress,
            };
            return None;
        }

        self.generation += 1;
        let operation = self.active_tab;
        self.status = LookupStatus::Loading {
            operation,
            generation: self.generation,
        };

        debug!(generation = self.generation, ?operation, %address, "lookup started");

        Some(LookupRequest {
            generation: self.generation,
            operation,
            address,
        })
    }

    /// Re-run the lookup if there is any address text at all
    pub fn refresh(&mut self) -> Option<LookupRequest> {
        if self.address().is_empty() {
            return None;
        }
        self.submit()
    }

    /// Fold a finished lookup back into the state.
    ///
    /// Outcomes from anything but the latest request are dropped.
    pub fn apply(&mut self, outcome: LookupOutcome) {
        let current = matches!(
            self.status,
            LookupStatus::Loading { generation, .. } if generation == outcome.generation
        );
        if !current {
            debug!(
                generation = outcome.generation,
                latest = self.generation,
                "discarding stale lookup outcome"
            );
            return;
        }

        match outcome.result {
            Ok(LookupData::Balance(record)) => {
                self.balance = Some(record);
                self.status = LookupStatus::Success {
                    operation: Tab::Balance,
                };
            }
            Ok(LookupData::Transactions(transactions)) => {
                self.transactions = transactions;
                self.selected_tx = 0;
                self.status = LookupStatus::Success {
                    operation: Tab::Transactions,
                };
            }
            Err(failure) => {
                self.balance = None;
                self.transactions.clear();
                self.selected_tx = 0;
                self.status = LookupStatus::Failed {
                    error: failure.into(),
                };
            }
        }
    }

    /// Transactions the current view variant displays
    pub fn visible_transactions(&self) -> &[TransactionSignature] {
        match self.config.view.limit() {
            Some(limit) => &self.transactions[..self.transactions.len().min(limit)],
            None => &self.transactions,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_transactions().len();
        if self.active_tab == Tab::Transactions && len > 0 {
            self.selected_tx = (self.selected_tx + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_transactions().len();
        if self.active_tab == Tab::Transactions && len > 0 {
            self.selected_tx = if self.selected_tx == 0 {
                len - 1
            } else {
                self.selected_tx - 1
            };
        }
    }

    /// The full, untruncated value the copy action puts on the clipboard
    pub fn copy_target(&self) -> Option<&str> {
        match self.active_tab {
            Tab::Balance => self.balance.as_ref().map(|b| b.address.as_str()),
            Tab::Transactions => self
                .visible_transactions()
                .get(self.selected_tx)
                .map(|tx| tx.signature.as_str()),
        }
    }

    /// Solscan page for whatever `copy_target` points at
    pub fn explorer_url(&self) -> Option<String> {
        let cluster = &self.config.cluster;
        let target = self.copy_target()?;
        Some(match self.active_tab {
            Tab::Balance => format!("https://solscan.io/account/{target}?cluster={cluster}"),
            Tab::Transactions => format!("https://solscan.io/tx/{target}?cluster={cluster}"),
        })
    }

    pub fn content(&self) -> TabContent<'_> {
        if self.is_loading() {
            return TabContent::Loading(self.active_tab.loading_message());
        }

        match self.active_tab {
            Tab::Balance => match &self.balance {
                Some(balance) => TabContent::Balance(balance),
                None => TabContent::GetStarted(Tab::Balance),
            },
            Tab::Transactions => {
                if !self.transactions.is_empty() {
                    TabContent::Transactions {
                        shown: self.visible_transactions(),
                        total: self.transactions.len(),
                        selected: self.selected_tx,
                    }
                } else if self.balance.is_some() || !self.address().is_empty() {
                    TabContent::NoTransactions
                } else {
                    TabContent::GetStarted(Tab::Transactions)
                }
            }
        }
    }
}
