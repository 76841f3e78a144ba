//! Reusable UI components.
//!
//! Small ShadCN-style building blocks shared by the chat and lookup screens.

mod button;
mod card;
mod icons;
mod input;

pub use button::{Button, ButtonVariant, SubmitButton};
pub use card::{Card, CardContent, CardHeader};
pub use icons::{CarIcon, SendIcon, SparklesIcon};
pub use input::{Input, Select};
