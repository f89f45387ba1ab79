//! Screen identifiers, in tab-bar order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home,
    Orders,
    Settings,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [Self::Home, Self::Orders, Self::Settings];

    /// Number key that jumps to this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Orders => 2,
            Self::Settings => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Orders => "Orders",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tab_order_wraps() {
        assert_eq!(ScreenId::Settings.next(), ScreenId::Home);
        assert_eq!(ScreenId::Home.prev(), ScreenId::Settings);
        assert_eq!(ScreenId::Orders.next(), ScreenId::Settings);
    }

    #[test]
    fn number_keys_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
        assert_eq!(ScreenId::from_number(4), None);
    }
}
