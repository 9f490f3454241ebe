//! Custom styles for finder widgets.

use super::theme::FinderTheme;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Vector};

/// Style for the main container.
pub fn main_container(theme: &FinderTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.background)),
        text_color: Some(theme.text),
        ..Default::default()
    }
}

/// Style for the search input.
pub fn search_input(theme: &FinderTheme, focused: bool) -> text_input::Style {
    let border_color = if focused { theme.accent } else { theme.border };

    text_input::Style {
        background: Background::Color(theme.surface),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: theme.subtext,
        placeholder: theme.subtext,
        value: theme.text,
        selection: FinderTheme::with_alpha(theme.accent, 0.3),
    }
}

/// Style for an emoji card in the grid.
pub fn emoji_card(theme: &FinderTheme, selected: bool, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    let background = if hovered || selected {
        theme.border
    } else {
        theme.surface
    };
    let border_color = if hovered || selected {
        theme.accent
    } else {
        theme.border
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: if hovered {
            Shadow {
                color: FinderTheme::with_alpha(theme.accent, 0.1),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            }
        } else {
            Shadow::default()
        },
    }
}

/// Style for the small "Copied!" pill on a card.
pub fn copied_pill(theme: &FinderTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.accent)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a toast at the bottom of the window.
pub fn toast(theme: &FinderTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.surface)),
        text_color: Some(theme.text),
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Style for scrollable results.
pub fn results_scrollable(theme: &FinderTheme) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            color: FinderTheme::with_alpha(theme.subtext, 0.3),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
    }
}
