#[cfg(feature = "colors")]
use nu_ansi_term::{Color, Style};

#[cfg(feature = "colors")]
const DEFAULT_COLORS: [u8; 12] = [39, 42, 129, 166, 178, 203, 33, 70, 135, 208, 44, 163];

/// Assigns colors to packages.
///
/// The same package name always gets the same color. A plain palette produces
/// empty escape sequences, so that formatting code can use it unconditionally.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    #[cfg(feature = "colors")]
    colors: Option<Vec<Color>>,
}

impl Palette {
    /// A palette without colors.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            #[cfg(feature = "colors")]
            colors: None,
        }
    }

    /// The default palette; without feature `colors` this is the plain palette.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            #[cfg(feature = "colors")]
            colors: Some(DEFAULT_COLORS.iter().map(|c| Color::Fixed(*c)).collect()),
        }
    }

    /// A palette that picks from the given colors.
    ///
    /// An empty list yields the plain palette.
    #[cfg(feature = "colors")]
    #[cfg_attr(docsrs, doc(cfg(feature = "colors")))]
    #[must_use]
    pub fn with_colors(colors: Vec<Color>) -> Self {
        Self {
            colors: if colors.is_empty() { None } else { Some(colors) },
        }
    }

    /// True unless this is the plain palette.
    #[must_use]
    pub fn is_colored(&self) -> bool {
        #[cfg(feature = "colors")]
        {
            self.colors.is_some()
        }
        #[cfg(not(feature = "colors"))]
        {
            false
        }
    }

    /// The escape sequence that switches to the color of the given package.
    #[must_use]
    pub fn color_for(&self, package: &str) -> String {
        #[cfg(feature = "colors")]
        {
            if let Some(ref colors) = self.colors {
                let idx = usize::try_from(fnv1a(package) % colors.len() as u64).unwrap_or(0);
                return Style::new().fg(colors[idx]).prefix().to_string();
            }
        }
        #[cfg(not(feature = "colors"))]
        let _ = package;
        String::new()
    }

    /// The escape sequence that highlights error markers.
    #[must_use]
    pub fn error_highlight(&self) -> String {
        #[cfg(feature = "colors")]
        {
            if self.is_colored() {
                return Style::new().fg(Color::Red).bold().prefix().to_string();
            }
        }
        String::new()
    }

    /// The escape sequence that resets all styling.
    #[must_use]
    pub fn reset(&self) -> &'static str {
        if self.is_colored() {
            "\u{1b}[0m"
        } else {
            ""
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

// Stable across runs and platforms, unlike the std hasher.
#[cfg(feature = "colors")]
fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod test {
    use super::Palette;

    #[test]
    fn plain_palette_is_empty() {
        let palette = Palette::plain();
        assert!(!palette.is_colored());
        assert_eq!(palette.color_for("users"), "");
        assert_eq!(palette.error_highlight(), "");
        assert_eq!(palette.reset(), "");
    }

    #[cfg(feature = "colors")]
    #[test]
    fn colors_are_stable() {
        let palette = Palette::colored();
        let users = palette.color_for("users");
        assert!(users.starts_with("\u{1b}["));
        assert_eq!(users, palette.color_for("users"));
        assert_eq!(users, Palette::colored().color_for("users"));
        assert_eq!(palette.reset(), "\u{1b}[0m");
    }

    #[cfg(feature = "colors")]
    #[test]
    fn custom_colors() {
        use nu_ansi_term::Color;
        let palette = Palette::with_colors(vec![Color::Green]);
        assert_eq!(palette.color_for("a"), palette.color_for("b"));
        assert!(!Palette::with_colors(Vec::new()).is_colored());
    }
}
