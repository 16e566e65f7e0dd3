use crate::system::process::SortMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SortBy(SortMode),
    MoreBubbles,
    FewerBubbles,
    None,
}
