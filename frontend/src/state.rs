use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;
use once_cell::sync::Lazy;

use crate::types::NoteStruct;

pub static NOTES: Lazy<MutableVec<NoteStruct>> = Lazy::new(|| {
    MutableVec::new()
});

// one indicator flag for every in-flight request; last settlement wins
pub static LOADING: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

pub static TITLE_ERROR: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

pub static BODY_ERROR: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));
