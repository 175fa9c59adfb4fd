// Widget handles shared between the layout tree and event wiring
mod audio;
mod button;
mod dataframe;
mod handle;
mod json;
mod state;
mod textbox;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

pub use audio::Audio;
pub use button::{Button, ButtonVariant};
pub use dataframe::{Cell, Column, ColumnType, Dataframe, TableEvent};
pub use handle::Handle;
pub use json::Json;
pub use state::State;
pub use textbox::Textbox;

pub type ButtonHandle = Handle<Button>;
pub type DataframeHandle = Handle<Dataframe>;
pub type AudioHandle = Handle<Audio>;
pub type JsonHandle = Handle<Json>;
pub type TextboxHandle = Handle<Textbox>;
pub type PathStateHandle = Handle<State<Option<PathBuf>>>;

/// Any widget handle that can sit in a layout tree
#[derive(Debug, Clone)]
pub enum Component {
    Button(ButtonHandle),
    Dataframe(DataframeHandle),
    Audio(AudioHandle),
    Json(JsonHandle),
    Textbox(TextboxHandle),
    /// Hidden; never drawn
    PathState(PathStateHandle),
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Dataframe(_) => "dataframe",
            Self::Audio(_) => "audio",
            Self::Json(_) => "json",
            Self::Textbox(_) => "textbox",
            Self::PathState(_) => "state",
        }
    }

    /// Relative width inside a row
    pub fn scale(&self) -> u32 {
        match self {
            Self::Button(button) => button.borrow().scale,
            _ => 1,
        }
    }

    pub fn is_rendered(&self) -> bool {
        match self {
            Self::Button(button) => button.borrow().visible,
            Self::Textbox(textbox) => textbox.borrow().visible,
            Self::PathState(_) => false,
            Self::Dataframe(_) | Self::Audio(_) | Self::Json(_) => true,
        }
    }

    /// Label text the user can see on this widget
    pub fn visible_labels(&self) -> Vec<String> {
        match self {
            Self::Button(button) => {
                let button = button.borrow();
                if button.visible { vec![button.label.clone()] } else { Vec::new() }
            }
            Self::Dataframe(table) => {
                let table = table.borrow();
                let mut labels = vec![table.label.clone()];
                labels.extend(table.headers().map(str::to_owned));
                labels
            }
            Self::Audio(audio) => vec![audio.borrow().label.clone()],
            Self::Json(json) => vec![json.borrow().label.clone()],
            Self::Textbox(textbox) => {
                let textbox = textbox.borrow();
                if textbox.visible { vec![textbox.label.clone()] } else { Vec::new() }
            }
            Self::PathState(_) => Vec::new(),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match self {
            Self::Button(button) => button.borrow_mut().show(ui),
            Self::Dataframe(table) => table.borrow_mut().show(ui),
            Self::Audio(audio) => audio.borrow_mut().show(ui),
            Self::Json(json) => json.borrow_mut().show(ui),
            Self::Textbox(textbox) => textbox.borrow_mut().show(ui),
            Self::PathState(_) => {}
        }
    }
}

macro_rules! impl_from_handle {
    ($($variant:ident => $handle:ty),* $(,)?) => {
        $(
            impl From<$handle> for Component {
                fn from(handle: $handle) -> Self {
                    Self::$variant(handle)
                }
            }
        )*
    };
}

impl_from_handle! {
    Button => ButtonHandle,
    Dataframe => DataframeHandle,
    Audio => AudioHandle,
    Json => JsonHandle,
    Textbox => TextboxHandle,
    PathState => PathStateHandle,
}
