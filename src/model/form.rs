use super::{Limit, Sex, ValidationError, parse_age, validate_name, validate_sex};

/// Live, editable values of the account form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub age_text: String,
    pub sex: Sex,
    pub limit: Limit,
    pub is_student: bool,
}

impl FormState {
    /// Creates an empty form with the slider at `limit`.
    pub fn with_limit(limit: Limit) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Returns `true` if the form can be submitted as it stands.
    ///
    /// Drives the enabled state of the submit button, so it is evaluated on
    /// every render.
    pub fn is_submittable(&self) -> bool {
        validate_name(&self.name).is_ok()
            && parse_age(&self.age_text).is_ok()
            && validate_sex(self.sex).is_ok()
    }

    /// Validates every field and snapshots the form.
    ///
    /// On failure returns one error per failing field, in field order. The
    /// form itself is never modified.
    pub fn submit(&self) -> Result<ConfirmedSnapshot, Vec<ValidationError>> {
        let name = validate_name(&self.name);
        let age = parse_age(&self.age_text);
        let sex = validate_sex(self.sex);

        match (name, age, sex) {
            (Ok(name), Ok(age), Ok(sex)) => Ok(ConfirmedSnapshot {
                name: name.to_string(),
                age,
                sex,
                limit: self.limit,
                is_student: self.is_student,
            }),
            (name, age, sex) => Err([name.err(), age.err(), sex.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

/// Record of the last successfully validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedSnapshot {
    name: String,
    age: u32,
    sex: Sex,
    limit: Limit,
    is_student: bool,
}

impl ConfirmedSnapshot {
    /// The trimmed account holder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn is_student(&self) -> bool {
        self.is_student
    }

    /// Human-readable summary, one line per field.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Nome: {}", self.name),
            format!("Idade: {}", self.age),
            format!("Sexo: {}", self.sex.label()),
            format!("Limite: {}", self.limit.currency()),
            format!("Estudante: {}", if self.is_student { "Sim" } else { "Não" }),
        ]
    }
}
