use std::{collections::BTreeMap, fmt};

use alloy_primitives::Address;
use platform_host::{TxHash, WalletError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation id attached to balance and counter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Raw value written to the preference store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; anything other than `light`/`dark` counts as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for the control that switches away from `self`.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle dark mode",
            Self::Dark => "Toggle light mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPhase {
    #[default]
    Loading,
    /// Wallet probe in flight. `recheck` is set when the user asked for it from the install prompt.
    Detecting { recheck: bool },
    NoWallet,
    HasWallet,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BalanceState {
    #[default]
    Idle,
    Loading {
        request: RequestId,
    },
    Ready {
        request: RequestId,
        account: Address,
        balance: String,
    },
    Failed {
        request: RequestId,
        error: WalletError,
    },
}

impl BalanceState {
    pub fn request(&self) -> Option<RequestId> {
        match self {
            Self::Idle => None,
            Self::Loading { request }
            | Self::Ready { request, .. }
            | Self::Failed { request, .. } => Some(*request),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Checking,
    Unminted,
    Minted,
    /// Mint submitted; `tx` is known once the wallet has broadcast it.
    Pending { tx: Option<TxHash> },
    Failed { error: WalletError },
}

impl SlotState {
    pub fn can_mint(&self) -> bool {
        matches!(self, Self::Unminted)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    /// Live token counter, once read.
    pub count: Option<u64>,
    pub count_request: Option<RequestId>,
    /// Failure of the latest counter read, cleared when a new read starts.
    pub count_error: Option<WalletError>,
    pub slots: BTreeMap<SlotId, SlotState>,
}

impl GalleryState {
    /// Slot ids in display order; always `1..=count + 1` once the counter is known.
    pub fn slot_ids(&self) -> Vec<SlotId> {
        self.slots.keys().copied().collect()
    }

    pub fn slot(&self, slot: SlotId) -> Option<&SlotState> {
        self.slots.get(&slot)
    }

    /// Whether the counter read failed and no retry is in flight.
    pub fn count_failed(&self) -> bool {
        self.count_error.is_some() && self.count_request.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Component a status message belongs to.
pub enum StatusOrigin {
    Install,
    Balance,
    Gallery,
    Slot(SlotId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Cleared automatically after the configured delay.
    Info,
    /// Stays until dismissed or replaced.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: StatusId,
    pub origin: StatusOrigin,
    pub level: StatusLevel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Complete reactive state of the mint front-end.
pub struct MintState {
    pub phase: RootPhase,
    /// Effective theme once hydrated.
    pub theme: Option<ThemePreference>,
    pub balance: BalanceState,
    pub gallery: GalleryState,
    pub statuses: Vec<StatusMessage>,
    pub(crate) next_request_id: u64,
    pub(crate) next_status_id: u64,
}

impl MintState {
    pub fn status_for(&self, origin: StatusOrigin) -> Option<&StatusMessage> {
        self.statuses.iter().find(|status| status.origin == origin)
    }

    pub(crate) fn next_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    /// Replaces any status owned by `origin` and returns the new id.
    pub(crate) fn set_status(
        &mut self,
        origin: StatusOrigin,
        level: StatusLevel,
        text: impl Into<String>,
    ) -> StatusId {
        self.clear_status(origin);
        self.next_status_id += 1;
        let id = StatusId(self.next_status_id);
        self.statuses.push(StatusMessage {
            id,
            origin,
            level,
            text: text.into(),
        });
        id
    }

    pub(crate) fn clear_status(&mut self, origin: StatusOrigin) {
        self.statuses.retain(|status| status.origin != origin);
    }
}
