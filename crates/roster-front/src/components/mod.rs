pub mod form_field;
pub mod new_player_form;
pub mod player_card;
pub mod player_details;
pub mod player_list;

pub use form_field::*;
pub use new_player_form::*;
pub use player_card::*;
pub use player_details::*;
pub use player_list::*;
