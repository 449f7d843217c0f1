//! Lark interactive message card.
//!
//! Only the subset of the card schema the notifier emits is modelled: a
//! colored header with a localized plain-text title, and per-locale element
//! lists made of markdown and note blocks.

use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Locales every card is rendered in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[display("zh_cn")]
    ZhCn,
    #[display("en_us")]
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];
}

/// Header color template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum HeaderTemplate {
    #[display("green")]
    Green,
    #[display("red")]
    Red,
}

/// A card element, tagged by its `tag` field on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Element {
    PlainText { i18n: BTreeMap<Locale, String> },
    Markdown { content: String },
    Note { elements: Vec<Element> },
    LarkMd { content: String },
}

impl Element {
    pub fn markdown(content: impl Into<String>) -> Self {
        Element::Markdown {
            content: content.into(),
        }
    }

    pub fn lark_md(content: impl Into<String>) -> Self {
        Element::LarkMd {
            content: content.into(),
        }
    }

    pub fn note(elements: Vec<Element>) -> Self {
        Element::Note { elements }
    }

    /// Text content of a markdown or lark_md element.
    pub fn content(&self) -> Option<&str> {
        match self {
            Element::Markdown { content } | Element::LarkMd { content } => Some(content.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub template: HeaderTemplate,
    pub title: Element,
}

impl Header {
    /// Localized title text, when the title is a plain-text element.
    pub fn title_text(&self, locale: Locale) -> Option<&str> {
        match &self.title {
            Element::PlainText { i18n } => i18n.get(&locale).map(String::as_str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub i18n_elements: BTreeMap<Locale, Vec<Element>>,
    pub header: Header,
}

impl MessageCard {
    /// Elements rendered for one locale.
    pub fn elements(&self, locale: Locale) -> &[Element] {
        self.i18n_elements
            .get(&locale)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Content of the main markdown block for one locale.
    pub fn markdown(&self, locale: Locale) -> Option<&str> {
        self.elements(locale).iter().find_map(|e| match e {
            Element::Markdown { content } => Some(content.as_str()),
            _ => None,
        })
    }
}
