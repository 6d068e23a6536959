mod cycle;
mod form;
mod limit;
mod sex;
mod validation;

pub use cycle::cycle;
pub use form::{ConfirmedSnapshot, FormState};
pub use limit::Limit;
pub use sex::Sex;
pub use validation::{MIN_AGE, ValidationError, parse_age, validate_name, validate_sex};
