mod form_state;

pub use form_state::FormState;
