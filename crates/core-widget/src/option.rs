//! Configuration value for the `Input` control.
//!
//! Strategies (insert-mode predicate, transform, callbacks) are stored as
//! `Rc<dyn Fn ..>` so an option can be cloned into several controls and
//! still share state the closures capture.

use crate::text_ref::TextRef;
use core_actions::{LengthUnit, MaxLength};
use core_config::{InputSettings, MaxLenUnit, SettingsError, check_mask};
use core_render::{Color, Element};
use std::fmt;
use std::rc::Rc;

/// Arguments to the transform strategy.
#[derive(Debug, Clone)]
pub struct TransformState {
    pub element: Element,
    pub hovered: bool,
    pub focused: bool,
    pub is_placeholder: bool,
}

pub type Transform = Rc<dyn Fn(TransformState) -> Element>;
pub type Callback = Rc<dyn Fn()>;
pub type Predicate = Rc<dyn Fn() -> bool>;

/// Placeholder dimmed; focused inverted; otherwise hovered gets a dark-gray
/// background.
pub fn default_transform(state: TransformState) -> Element {
    let mut element = state.element;
    if state.is_placeholder {
        element = element.dim();
    }
    if state.focused {
        element = element.inverted();
    } else if state.hovered {
        element = element.bgcolor(Color::DarkGrey);
    }
    element
}

#[derive(Clone)]
pub struct InputOption {
    pub content: TextRef,
    pub placeholder: TextRef,
    pub password: bool,
    /// Set through `with_mask`, which rejects characters wider than one column.
    mask: char,
    pub multiline: bool,
    /// Evaluated per keystroke: `true` inserts, `false` overwrites.
    pub insert: Predicate,
    pub max_len: MaxLength,
    pub transform: Transform,
    pub on_change: Callback,
    pub on_enter: Callback,
}

impl InputOption {
    pub fn default_transform() -> Transform {
        Rc::new(default_transform)
    }

    /// Map a parsed `[input]` table onto a fresh option with its own buffers.
    pub fn from_settings(settings: &InputSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let insert = settings.insert;
        let unit = match settings.max_len_unit {
            MaxLenUnit::Bytes => LengthUnit::Bytes,
            MaxLenUnit::CodePoints => LengthUnit::CodePoints,
        };
        let max_len = settings
            .max_len
            .map(|limit| MaxLength { limit, unit })
            .unwrap_or_default();
        Self {
            placeholder: TextRef::new(settings.placeholder.as_str()),
            password: settings.password,
            multiline: settings.multiline,
            insert: Rc::new(move || insert),
            max_len,
            ..Self::default()
        }
        .with_mask(settings.mask_char())
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    pub fn with_mask(mut self, mask: char) -> Result<Self, SettingsError> {
        check_mask(mask)?;
        self.mask = mask;
        Ok(self)
    }

    pub fn with_content(mut self, content: TextRef) -> Self {
        self.content = content;
        self
    }

    pub fn with_placeholder(mut self, placeholder: TextRef) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_transform(mut self, f: impl Fn(TransformState) -> Element + 'static) -> Self {
        self.transform = Rc::new(f);
        self
    }

    pub fn on_change(mut self, f: impl Fn() + 'static) -> Self {
        self.on_change = Rc::new(f);
        self
    }

    pub fn on_enter(mut self, f: impl Fn() + 'static) -> Self {
        self.on_enter = Rc::new(f);
        self
    }

    pub fn with_insert_mode(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.insert = Rc::new(f);
        self
    }
}

impl Default for InputOption {
    fn default() -> Self {
        Self {
            content: TextRef::default(),
            placeholder: TextRef::default(),
            password: false,
            mask: '*',
            multiline: false,
            insert: Rc::new(|| true),
            max_len: MaxLength::unbounded(),
            transform: Self::default_transform(),
            on_change: Rc::new(|| {}),
            on_enter: Rc::new(|| {}),
        }
    }
}

impl fmt::Debug for InputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputOption")
            .field("content", &self.content)
            .field("placeholder", &self.placeholder)
            .field("password", &self.password)
            .field("multiline", &self.multiline)
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}
