//! Server-side rendering of plan cards.

mod card;

pub use card::{
    CardRenderer, CHOOSE_PLAN_LABEL, FETCH_FAILED_MESSAGE, NO_PLANS_MESSAGE, PLAN_ACK_MESSAGE,
    STORE_UNAVAILABLE_MESSAGE,
};
