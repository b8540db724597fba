//! Shared types used across CNPJFETCH.
//! Includes the validated `Cnpj` identifier, the `CompanyRecord` field set
//! returned by the registry, and the `LookupRecord` result carried into
//! the output spreadsheet.
use serde::{Deserialize, Serialize};

/// A validated CNPJ: exactly 14 ASCII digits.
///
/// Construction goes through [`Cnpj::parse`], which strips every
/// non-digit character from the raw cell value and rejects anything that
/// does not come out at 14 digits.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cnpj(String);

impl Cnpj {
    pub const LEN: usize = 14;

    /// Sanitize a raw spreadsheet cell into a `Cnpj`.
    ///
    /// Returns `None` when the digit characters of the input do not have
    /// length exactly 14.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == Self::LEN {
            Some(Cnpj(digits))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The flat field set decoded from a successful registry response.
///
/// Every slot is optional: a field the registry did not send stays
/// `None` and its output cell stays empty. List-valued response fields
/// (primary activity, QSA partners) are truncated to their first
/// element; the remaining elements are discarded on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cnpj: Option<String>,
    pub situacao: Option<String>,
    pub nome: Option<String>,
    pub fantasia: Option<String>,
    pub natureza_juridica: Option<String>,
    pub atividade_principal: Option<String>,
    pub atividade_principal_codigo: Option<String>,
    pub tipo: Option<String>,
    pub uf: Option<String>,
    pub municipio: Option<String>,
    pub bairro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub porte: Option<String>,
    pub data_situacao: Option<String>,
    pub abertura: Option<String>,
    pub ultima_atualizacao: Option<String>,
    pub status: Option<String>,
    pub motivo_situacao: Option<String>,
    pub situacao_especial: Option<String>,
    pub data_situacao_especial: Option<String>,
    pub capital_social: Option<String>,
    pub qsa_qualificacao: Option<String>,
    pub qsa_nome: Option<String>,
}

/// One output row per input identifier: either the decoded field set or
/// the identifier plus a failure description, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupRecord {
    Company(Box<CompanyRecord>),
    Failed { cnpj: Cnpj, error: String },
}

/// Output column headers, in write order. The final `Erro` column is
/// populated only for failed lookups.
pub const RESULT_COLUMNS: [&str; 29] = [
    "CNPJ",
    "Situação",
    "Razão Social",
    "Nome Fantasia",
    "Natureza Jurídica",
    "Atividade Principal",
    "Código Atividade Principal",
    "Tipo",
    "UF",
    "Municipio",
    "Bairro",
    "Logradouro",
    "Número",
    "Complemento Endereço",
    "CEP",
    "Telefone",
    "E-mail",
    "Porte",
    "Data Situação Cadastral",
    "Abertura",
    "Última Atualização",
    "Status",
    "Motivo Situação",
    "Situação Especial",
    "Data Situação Especial",
    "Capital Social",
    "Qualificação",
    "Nome Qualificação",
    "Erro",
];

impl LookupRecord {
    pub fn failed(cnpj: Cnpj, error: impl Into<String>) -> Self {
        LookupRecord::Failed {
            cnpj,
            error: error.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LookupRecord::Failed { .. })
    }

    /// The failure description, when this record is an error record.
    pub fn error(&self) -> Option<&str> {
        match self {
            LookupRecord::Company(_) => None,
            LookupRecord::Failed { error, .. } => Some(error),
        }
    }

    /// Cell values aligned with [`RESULT_COLUMNS`].
    pub fn row(&self) -> Vec<Option<&str>> {
        fn opt(slot: &Option<String>) -> Option<&str> {
            slot.as_deref()
        }

        match self {
            LookupRecord::Company(rec) => vec![
                opt(&rec.cnpj),
                opt(&rec.situacao),
                opt(&rec.nome),
                opt(&rec.fantasia),
                opt(&rec.natureza_juridica),
                opt(&rec.atividade_principal),
                opt(&rec.atividade_principal_codigo),
                opt(&rec.tipo),
                opt(&rec.uf),
                opt(&rec.municipio),
                opt(&rec.bairro),
                opt(&rec.logradouro),
                opt(&rec.numero),
                opt(&rec.complemento),
                opt(&rec.cep),
                opt(&rec.telefone),
                opt(&rec.email),
                opt(&rec.porte),
                opt(&rec.data_situacao),
                opt(&rec.abertura),
                opt(&rec.ultima_atualizacao),
                opt(&rec.status),
                opt(&rec.motivo_situacao),
                opt(&rec.situacao_especial),
                opt(&rec.data_situacao_especial),
                opt(&rec.capital_social),
                opt(&rec.qsa_qualificacao),
                opt(&rec.qsa_nome),
                None,
            ],
            LookupRecord::Failed { cnpj, error } => {
                let mut row = vec![None; RESULT_COLUMNS.len()];
                row[0] = Some(cnpj.as_str());
                row[RESULT_COLUMNS.len() - 1] = Some(error.as_str());
                row
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_formatting() {
        let cnpj = Cnpj::parse("12.345.678/0001-95").unwrap();
        assert_eq!(cnpj.as_str(), "12345678000195");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Cnpj::parse("123").is_none());
        assert!(Cnpj::parse("12.345.678/0001-9").is_none());
        assert!(Cnpj::parse("123456780001951").is_none());
        assert!(Cnpj::parse("").is_none());
    }

    #[test]
    fn row_matches_column_count() {
        let company = LookupRecord::Company(Box::default());
        assert_eq!(company.row().len(), RESULT_COLUMNS.len());

        let failed = LookupRecord::failed(Cnpj::parse("12345678000195").unwrap(), "HTTP 500");
        assert_eq!(failed.row().len(), RESULT_COLUMNS.len());
    }

    #[test]
    fn failed_row_carries_only_cnpj_and_error() {
        let cnpj = Cnpj::parse("12345678000195").unwrap();
        let record = LookupRecord::failed(cnpj, "HTTP 500");
        let row = record.row();

        assert_eq!(row[0], Some("12345678000195"));
        assert_eq!(row[RESULT_COLUMNS.len() - 1], Some("HTTP 500"));
        assert!(row[1..RESULT_COLUMNS.len() - 1].iter().all(Option::is_none));
    }

    #[test]
    fn company_row_has_empty_error_cell() {
        let record = LookupRecord::Company(Box::new(CompanyRecord {
            cnpj: Some("12345678000195".to_string()),
            situacao: Some("ATIVA".to_string()),
            ..Default::default()
        }));
        let row = record.row();

        assert_eq!(row[0], Some("12345678000195"));
        assert_eq!(row[1], Some("ATIVA"));
        assert_eq!(row[RESULT_COLUMNS.len() - 1], None);
        assert!(record.error().is_none());
    }
}
