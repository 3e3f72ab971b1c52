//! Loading state for images, SVGs and videos rendered behind a placeholder.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

/// Generic image shown for missing or failed assets.
pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";

/// Fixed-mode dimensions used when a caller gives none.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// `HTMLMediaElement.readyState` once the current frame is available.
pub const HAVE_CURRENT_DATA: u16 = 2;
/// `HTMLMediaElement.networkState` when no playable source was found.
pub const NETWORK_NO_SOURCE: u16 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl AssetState {
    /// The asset fired its load event. A late load after a failure is ignored.
    pub fn on_load(&mut self) {
        if *self == Self::Loading {
            *self = Self::Loaded;
        }
    }

    /// The asset failed to load; the caller swaps in the placeholder.
    pub fn on_error(&mut self) {
        if *self == Self::Loading {
            *self = Self::Failed;
        }
    }

    /// Settle from a media element's `readyState`/`networkState`, for
    /// elements that finished (or gave up) before handlers were attached.
    pub fn on_media_status(&mut self, ready_state: u16, network_state: u16) {
        if ready_state >= HAVE_CURRENT_DATA {
            self.on_load();
        } else if network_state == NETWORK_NO_SOURCE {
            self.on_error();
        }
    }

    #[must_use]
    pub fn shows_spinner(self) -> bool {
        self == Self::Loading
    }

    /// Whether the real (or fallback) asset should be faded in.
    #[must_use]
    pub fn is_settled(self) -> bool {
        !self.shows_spinner()
    }
}

/// Source to render: the given path, or the placeholder when empty or failed.
#[must_use]
pub fn resolve_src(src: &str, state: AssetState) -> &str {
    if src.trim().is_empty() || state == AssetState::Failed {
        PLACEHOLDER_SRC
    } else {
        src
    }
}

/// How the wrapper sizes itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetLayout {
    /// Stretch to the parent box.
    Fill,
    /// Render at intrinsic dimensions.
    Fixed { width: u32, height: u32 },
}

impl AssetLayout {
    #[must_use]
    pub fn fixed(width: Option<u32>, height: Option<u32>) -> Self {
        Self::Fixed {
            width: width.unwrap_or(DEFAULT_WIDTH),
            height: height.unwrap_or(DEFAULT_HEIGHT),
        }
    }

    #[must_use]
    pub fn from_props(fill: bool, width: Option<u32>, height: Option<u32>) -> Self {
        if fill { Self::Fill } else { Self::fixed(width, height) }
    }

    #[must_use]
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            Self::Fill => None,
            Self::Fixed { width, height } => Some((width, height)),
        }
    }
}
