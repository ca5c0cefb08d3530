use crate::dictionary::Dictionary;

pub struct AppState {
    pub dictionary: Dictionary,
}
