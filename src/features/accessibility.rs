//! Accessibility option catalog
//!
//! Option ids are stable strings shared by the forms, the selection bag and
//! the suggestion list. Colors to avoid travel alongside the options in a
//! flat list as `color_<id>` entries.

use std::collections::BTreeSet;

use iced::Color;

use crate::i18n::Key;

pub const WHEELCHAIR: &str = "wheelchair";
pub const VISUAL: &str = "visual";
pub const COLORBLIND: &str = "colorblind";
pub const HEARING: &str = "hearing";
pub const STROLLER: &str = "stroller";
pub const ELDERLY: &str = "elderly";
pub const NOISE: &str = "noise";

/// Prefix marking a color entry in the tagged option list
pub const COLOR_PREFIX: &str = "color_";

/// One selectable accessibility need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityOption {
    pub id: &'static str,
    pub title: Key,
    pub description: Key,
}

/// One color the user may ask to avoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOption {
    pub id: &'static str,
    pub title: Key,
    pub swatch: Color,
    /// Suggestion line shown on the instructor notes screen
    pub difficulty: Key,
}

pub const OPTIONS: [AccessibilityOption; 7] = [
    AccessibilityOption {
        id: WHEELCHAIR,
        title: Key::OptionWheelchair,
        description: Key::OptionWheelchairDesc,
    },
    AccessibilityOption {
        id: VISUAL,
        title: Key::OptionVisual,
        description: Key::OptionVisualDesc,
    },
    AccessibilityOption {
        id: COLORBLIND,
        title: Key::OptionColorblind,
        description: Key::OptionColorblindDesc,
    },
    AccessibilityOption {
        id: HEARING,
        title: Key::OptionHearing,
        description: Key::OptionHearingDesc,
    },
    AccessibilityOption {
        id: STROLLER,
        title: Key::OptionStroller,
        description: Key::OptionStrollerDesc,
    },
    AccessibilityOption {
        id: ELDERLY,
        title: Key::OptionElderly,
        description: Key::OptionElderlyDesc,
    },
    AccessibilityOption {
        id: NOISE,
        title: Key::OptionNoise,
        description: Key::OptionNoiseDesc,
    },
];

pub const COLORS: [ColorOption; 4] = [
    ColorOption {
        id: "red",
        title: Key::ColorRed,
        swatch: Color::from_rgb(1.0, 0.0, 0.0),
        difficulty: Key::SuggestionColorRed,
    },
    ColorOption {
        id: "green",
        title: Key::ColorGreen,
        swatch: Color::from_rgb(0.0, 1.0, 0.0),
        difficulty: Key::SuggestionColorGreen,
    },
    ColorOption {
        id: "blue",
        title: Key::ColorBlue,
        swatch: Color::from_rgb(0.0, 0.0, 1.0),
        difficulty: Key::SuggestionColorBlue,
    },
    ColorOption {
        id: "purple",
        title: Key::ColorPurple,
        swatch: Color::from_rgb(0.502, 0.0, 0.502),
        difficulty: Key::SuggestionColorPurple,
    },
];

/// Look up an option by id
pub fn option(id: &str) -> Option<&'static AccessibilityOption> {
    OPTIONS.iter().find(|o| o.id == id)
}

/// Look up a color by id
pub fn color(id: &str) -> Option<&'static ColorOption> {
    COLORS.iter().find(|c| c.id == id)
}

/// Flatten options and colors into the tagged list form
pub fn tag_options<'a, O, C>(options: O, colors: C) -> Vec<String>
where
    O: IntoIterator<Item = &'a str>,
    C: IntoIterator<Item = &'a str>,
{
    options
        .into_iter()
        .map(str::to_string)
        .chain(colors.into_iter().map(|c| format!("{COLOR_PREFIX}{c}")))
        .collect()
}

/// Split a tagged list back into (options, colors)
pub fn split_tagged<I, S>(tagged: I) -> (BTreeSet<String>, BTreeSet<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = BTreeSet::new();
    let mut colors = BTreeSet::new();
    for entry in tagged {
        let entry = entry.as_ref();
        match entry.strip_prefix(COLOR_PREFIX) {
            Some(color) => {
                colors.insert(color.to_string());
            }
            None => {
                options.insert(entry.to_string());
            }
        }
    }
    (options, colors)
}

/// Entries worth showing on the summary screen (colors are folded into
/// the colorblind option)
pub fn visible_options<'a>(tagged: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
    tagged
        .iter()
        .map(String::as_str)
        .filter(|entry| !entry.starts_with(COLOR_PREFIX))
}

/// Choices on the accessibility options screen before they are submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessibilityForm {
    options: BTreeSet<&'static str>,
    colors: BTreeSet<&'static str>,
}

impl AccessibilityForm {
    /// Prefill from previously submitted ids; unknown ids are dropped
    pub fn from_selected<'a>(
        options: impl IntoIterator<Item = &'a str>,
        colors: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut form = Self {
            options: options.into_iter().filter_map(option).map(|o| o.id).collect(),
            colors: BTreeSet::new(),
        };
        if form.is_selected(COLORBLIND) {
            form.colors = colors.into_iter().filter_map(color).map(|c| c.id).collect();
        }
        form
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.options.contains(id)
    }

    pub fn is_color_selected(&self, id: &str) -> bool {
        self.colors.contains(id)
    }

    /// Whether the color sub-selection is shown
    pub fn shows_colors(&self) -> bool {
        self.is_selected(COLORBLIND)
    }

    /// Flip an option. Deselecting colorblind drops the chosen colors.
    pub fn toggle(&mut self, id: &str) {
        let Some(option) = option(id) else {
            return;
        };
        if !self.options.remove(option.id) {
            self.options.insert(option.id);
        } else if option.id == COLORBLIND {
            self.colors.clear();
        }
    }

    /// Flip a color; ignored while colorblind is not selected
    pub fn toggle_color(&mut self, id: &str) {
        if !self.shows_colors() {
            return;
        }
        let Some(color) = color(id) else {
            return;
        };
        if !self.colors.remove(color.id) {
            self.colors.insert(color.id);
        }
    }

    /// Options in catalog order followed by `color_<id>` entries
    pub fn tagged(&self) -> Vec<String> {
        tag_options(
            OPTIONS
                .iter()
                .map(|o| o.id)
                .filter(|id| self.options.contains(*id)),
            COLORS
                .iter()
                .map(|c| c.id)
                .filter(|id| self.colors.contains(*id)),
        )
    }
}

/// A line on the "mention to your instructor" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub text: Key,
    /// Nested under the previous suggestion
    pub indented: bool,
}

/// Suggestions for the instructor, in catalog order
pub fn suggestions(tagged: &[String]) -> Vec<Suggestion> {
    let has = |id: &str| tagged.iter().any(|entry| entry == id);
    let mut out = Vec::new();

    if has(WHEELCHAIR) {
        out.push(Suggestion {
            text: Key::SuggestionWheelchair,
            indented: false,
        });
    }
    if has(VISUAL) {
        out.push(Suggestion {
            text: Key::SuggestionVisual,
            indented: false,
        });
    }
    if has(COLORBLIND) {
        out.push(Suggestion {
            text: Key::SuggestionColorblind,
            indented: false,
        });
        out.extend(
            tagged
                .iter()
                .filter_map(|entry| entry.strip_prefix(COLOR_PREFIX))
                .filter_map(color)
                .map(|c| Suggestion {
                    text: c.difficulty,
                    indented: true,
                }),
        );
    }
    if has(HEARING) {
        out.push(Suggestion {
            text: Key::SuggestionHearing,
            indented: false,
        });
    }
    if has(ELDERLY) {
        out.push(Suggestion {
            text: Key::SuggestionElderly,
            indented: false,
        });
    }
    if has(NOISE) {
        out.push(Suggestion {
            text: Key::SuggestionNoise,
            indented: false,
        });
    }

    out
}

/// Campuses offered by the class selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Campus {
    Ficus,
    Kirya,
}

impl Campus {
    pub const ALL: [Campus; 2] = [Campus::Ficus, Campus::Kirya];

    /// Identifier stored in the selection bag
    pub fn id(self) -> &'static str {
        match self {
            Campus::Ficus => "ficus",
            Campus::Kirya => "kirya",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn title(self) -> Key {
        match self {
            Campus::Ficus => Key::CampusFicus,
            Campus::Kirya => Key::CampusKirya,
        }
    }

    pub fn description(self) -> Key {
        match self {
            Campus::Ficus => Key::CampusFicusDesc,
            Campus::Kirya => Key::CampusKiryaDesc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: BTreeSet<_> = OPTIONS.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), OPTIONS.len());
        assert!(option(COLORBLIND).is_some());
        assert!(option("jetpack").is_none());
    }

    #[test]
    fn test_tag_and_split() {
        let list = tag_options(["colorblind"], ["red", "purple"]);
        assert_eq!(list, tagged(&["colorblind", "color_red", "color_purple"]));

        let (options, colors) = split_tagged(&list);
        assert_eq!(options.len(), 1);
        assert!(colors.contains("red") && colors.contains("purple"));
    }

    #[test]
    fn test_visible_options_skip_colors() {
        let list = tagged(&["hearing", "color_red", "colorblind"]);
        let visible: Vec<_> = visible_options(&list).collect();
        assert_eq!(visible, vec!["hearing", "colorblind"]);
    }

    #[test]
    fn test_suggestions_follow_catalog_order() {
        let list = tagged(&["noise", "colorblind", "color_green", "wheelchair"]);
        let texts: Vec<Key> = suggestions(&list).iter().map(|s| s.text).collect();
        assert_eq!(
            texts,
            vec![
                Key::SuggestionWheelchair,
                Key::SuggestionColorblind,
                Key::SuggestionColorGreen,
                Key::SuggestionNoise,
            ]
        );
    }

    #[test]
    fn test_color_lines_need_colorblind() {
        let list = tagged(&["color_red", "stroller"]);
        assert!(suggestions(&list).is_empty());
    }

    #[test]
    fn test_form_deselecting_colorblind_clears_colors() {
        let mut form = AccessibilityForm::default();
        form.toggle_color("red");
        assert!(!form.is_color_selected("red"));

        form.toggle(COLORBLIND);
        form.toggle_color("red");
        form.toggle_color("blue");
        form.toggle(WHEELCHAIR);
        assert_eq!(
            form.tagged(),
            tagged(&["wheelchair", "colorblind", "color_red", "color_blue"])
        );

        form.toggle(COLORBLIND);
        assert_eq!(form.tagged(), tagged(&["wheelchair"]));

        form.toggle(COLORBLIND);
        assert!(!form.is_color_selected("red"));
    }

    #[test]
    fn test_form_prefill() {
        let form = AccessibilityForm::from_selected(["hearing", "jetpack"], ["green"]);
        assert!(form.is_selected(HEARING));
        assert_eq!(form.tagged(), tagged(&["hearing"]));

        let form = AccessibilityForm::from_selected(["colorblind"], ["green", "teal"]);
        assert_eq!(form.tagged(), tagged(&["colorblind", "color_green"]));
    }

    #[test]
    fn test_campus_ids() {
        for campus in Campus::ALL {
            assert_eq!(Campus::from_id(campus.id()), Some(campus));
        }
        assert_eq!(Campus::from_id("C"), None);
    }
}
