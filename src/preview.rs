//! Device preview projection: a pure function from the current content string
//! and a device context to render parameters. Nothing here reads or writes
//! store state.

use crate::model;

/// Shown instead of literal markup when there is nothing to render yet.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content yet";

/// The device frames the composer previews against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceContext {
    Web,
    Tablet,
    MobileApp,
    MobileWeb,
}

impl DeviceContext {
    pub const ALL: [DeviceContext; 4] = [
        DeviceContext::Web,
        DeviceContext::Tablet,
        DeviceContext::MobileApp,
        DeviceContext::MobileWeb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceContext::Web => "Web (Desktop)",
            DeviceContext::Tablet => "Tablet (iPad)",
            DeviceContext::MobileApp => "Mobile App (Push)",
            DeviceContext::MobileWeb => "Mobile Web",
        }
    }

    /// Frame dimensions in px, width then height.
    pub fn frame_size(&self) -> (u32, u32) {
        match self {
            DeviceContext::Web => (800, 600),
            DeviceContext::Tablet => (768, 600),
            DeviceContext::MobileApp | DeviceContext::MobileWeb => (375, 700),
        }
    }

    pub fn font_size_px(&self) -> u32 {
        match self {
            DeviceContext::Web | DeviceContext::Tablet => 16,
            DeviceContext::MobileApp | DeviceContext::MobileWeb => 14,
        }
    }

    pub fn padding_px(&self) -> u32 {
        match self {
            DeviceContext::MobileApp => 20,
            _ => 16,
        }
    }

    /// The push-notification frame renders light-on-dark.
    pub fn dark_scheme(&self) -> bool {
        matches!(self, DeviceContext::MobileApp)
    }
}

/// A rendered projection for one device frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Empty, whitespace-only, or canonical-empty content; the frame shows
    /// [`NO_CONTENT_PLACEHOLDER`] rather than the literal string.
    Placeholder,
    Content(RenderedMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub body: String,
    pub font_size_px: u32,
    pub padding_px: u32,
    pub dark_scheme: bool,
}

pub fn render(content: &str, context: DeviceContext) -> Preview {
    if model::is_blank(content) {
        return Preview::Placeholder;
    }
    Preview::Content(RenderedMessage {
        body: content.to_string(),
        font_size_px: context.font_size_px(),
        padding_px: context.padding_px(),
        dark_scheme: context.dark_scheme(),
    })
}
