//! Requirement tiers, their colors, and the tracked components.

use std::fmt;

/// An RGB triple used as a cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Compatibility verdict, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// No tier satisfied, or support has ended.
    Red,
    /// ESR requirements met.
    Yellow,
    /// Current release requirements met.
    Green,
    /// Current+3 requirements met.
    Greener,
}

impl Color {
    /// Display color for this verdict.
    pub fn rgb(self) -> Rgb {
        match self {
            Color::Red => Rgb(255, 204, 204),
            Color::Yellow => Rgb(255, 255, 153),
            Color::Green => Rgb(204, 255, 153),
            Color::Greener => Rgb(153, 255, 153),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Greener => "greener",
        };
        write!(f, "{}", name)
    }
}

/// One of the three requirement tiers, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Extended-support release.
    Esr,
    /// Current release.
    Current,
    /// Current release + 3.
    Future,
}

impl Tier {
    /// All tiers in evaluation order.
    pub const ALL: [Tier; 3] = [Tier::Esr, Tier::Current, Tier::Future];

    /// Releases between the current release and the future tier.
    pub const FUTURE_OFFSET: u32 = 3;

    /// Color assigned when this tier is satisfied.
    pub fn color(self) -> Color {
        match self {
            Tier::Esr => Color::Yellow,
            Tier::Current => Color::Green,
            Tier::Future => Color::Greener,
        }
    }

    /// Release number this tier checks against.
    ///
    /// Returns `None` when the future release number overflows.
    pub fn release_number(self, esr: u32, release: u32) -> Option<u32> {
        match self {
            Tier::Esr => Some(esr),
            Tier::Current => Some(release),
            Tier::Future => release.checked_add(Self::FUTURE_OFFSET),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Esr => "esr",
            Tier::Current => "current",
            Tier::Future => "current+3",
        };
        write!(f, "{}", name)
    }
}

/// A tracked library or toolchain, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Glibc,
    Glib,
    Gtk2,
    Gtk3,
    Pixman,
    StdCxx,
    Gcc,
}

impl Component {
    /// All components in display order.
    pub const ALL: [Component; 7] = [
        Component::Glibc,
        Component::Glib,
        Component::Gtk2,
        Component::Gtk3,
        Component::Pixman,
        Component::StdCxx,
        Component::Gcc,
    ];

    /// Key used in the catalogs.
    pub fn key(self) -> &'static str {
        match self {
            Component::Glibc => "glibc",
            Component::Glib => "glib",
            Component::Gtk2 => "gtk+2",
            Component::Gtk3 => "gtk+3",
            Component::Pixman => "pixman",
            Component::StdCxx => "stdc++",
            Component::Gcc => "GCC",
        }
    }

    /// Toolchain components are informative and excluded from the headline.
    pub fn is_toolchain(self) -> bool {
        matches!(self, Component::Gcc)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_ordered() {
        assert!(Color::Red < Color::Yellow);
        assert!(Color::Yellow < Color::Green);
        assert!(Color::Green < Color::Greener);
    }

    #[test]
    fn rgb_renders_css() {
        assert_eq!(Color::Red.rgb().to_string(), "rgb(255, 204, 204)");
        assert_eq!(Color::Greener.rgb().to_string(), "rgb(153, 255, 153)");
    }

    #[test]
    fn tiers_map_to_colors() {
        let colors: Vec<Color> = Tier::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(colors, vec![Color::Yellow, Color::Green, Color::Greener]);
    }

    #[test]
    fn tier_release_numbers() {
        assert_eq!(Tier::Esr.release_number(60, 78), Some(60));
        assert_eq!(Tier::Current.release_number(60, 78), Some(78));
        assert_eq!(Tier::Future.release_number(60, 78), Some(81));
        assert_eq!(Tier::Future.release_number(60, u32::MAX), None);
    }

    #[test]
    fn components_in_display_order() {
        let keys: Vec<&str> = Component::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["glibc", "glib", "gtk+2", "gtk+3", "pixman", "stdc++", "GCC"]
        );
    }

    #[test]
    fn only_gcc_is_toolchain() {
        let toolchain: Vec<Component> = Component::ALL
            .into_iter()
            .filter(|c| c.is_toolchain())
            .collect();
        assert_eq!(toolchain, vec![Component::Gcc]);
    }
}
