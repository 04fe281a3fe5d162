pub mod alert;
pub mod badge;
pub mod button;
pub mod field;
pub mod foundation;
pub mod loading;
pub mod modal;
pub mod stat;
pub mod table;

pub use alert::Alert;
pub use badge::Badge;
pub use button::Button;
pub use field::{SelectField, SelectOption, TextAreaField, TextField};
pub use foundation::{DaisyColor, DaisySize};
pub use loading::Loading;
pub use modal::Modal;
pub use stat::{Stat, StatItem};
pub use table::Table;
