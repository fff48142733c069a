/// Trello action model.
pub mod action;
/// Trello card model.
pub mod card;
/// Trello list model.
pub mod list;

pub use action::Action;
pub use card::Card;
pub use list::List;

/// Target position for a card or list.
///
/// Trello accepts the keywords `top` and `bottom` as well as an absolute
/// floating point position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pos {
    /// First position in the list.
    Top,
    /// Last position in the list.
    Bottom,
    /// An absolute position value.
    At(f64),
}

impl Pos {
    /// Renders the position as the API's `pos` parameter value.
    pub(crate) fn param(self) -> String {
        match self {
            Pos::Top => String::from("top"),
            Pos::Bottom => String::from("bottom"),
            Pos::At(value) => value.to_string(),
        }
    }
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn pos_renders_api_values() {
        assert_eq!(Pos::Top.param(), "top");
        assert_eq!(Pos::Bottom.param(), "bottom");
        assert_eq!(Pos::At(16384.0).param(), "16384");
        assert_eq!(Pos::At(0.5).param(), "0.5");
    }
}
