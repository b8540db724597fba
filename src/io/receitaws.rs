//! ReceitaWS registry client.
//!
//! One synchronous GET per identifier against
//! `{base_url}/v1/cnpj/{id}/days/{days}`, with a bounded timeout and an
//! optional bearer token. Each call is independent and best-effort:
//! transport, status, and decode failures fold into an error record and
//! the caller moves on to the next identifier.
use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::core::params::LookupParams;
use crate::types::{Cnpj, CompanyRecord, LookupRecord};

/// Public ReceitaWS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://receitaws.com.br";

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Non-success HTTP status. Renders as `HTTP {status}`, which is the
    /// exact string carried into the output's `Erro` column.
    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Wire format of a registry response. Every scalar is optional; list
/// fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryResponse {
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub fantasia: Option<String>,
    #[serde(default)]
    pub natureza_juridica: Option<String>,
    #[serde(default)]
    pub atividade_principal: Vec<Atividade>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub porte: Option<String>,
    #[serde(default)]
    pub data_situacao: Option<String>,
    #[serde(default)]
    pub abertura: Option<String>,
    #[serde(default)]
    pub ultima_atualizacao: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub motivo_situacao: Option<String>,
    #[serde(default)]
    pub situacao_especial: Option<String>,
    #[serde(default)]
    pub data_situacao_especial: Option<String>,
    // The service has shipped this both as a string and as a bare number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub capital_social: Option<String>,
    #[serde(default)]
    pub qsa: Vec<Socio>,
}

/// One activity entry from `atividade_principal`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Atividade {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// One partner entry from the QSA list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Socio {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub qual: Option<String>,
}

fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }))
}

impl RegistryResponse {
    /// Flatten the wire response into the output field set, taking the
    /// first element of each list field and discarding the rest.
    pub fn into_record(self) -> CompanyRecord {
        let atividade = self
            .atividade_principal
            .into_iter()
            .next()
            .unwrap_or_default();
        let socio = self.qsa.into_iter().next().unwrap_or_default();

        CompanyRecord {
            cnpj: self.cnpj,
            situacao: self.situacao,
            nome: self.nome,
            fantasia: self.fantasia,
            natureza_juridica: self.natureza_juridica,
            atividade_principal: atividade.text,
            atividade_principal_codigo: atividade.code,
            tipo: self.tipo,
            uf: self.uf,
            municipio: self.municipio,
            bairro: self.bairro,
            logradouro: self.logradouro,
            numero: self.numero,
            complemento: self.complemento,
            cep: self.cep,
            telefone: self.telefone,
            email: self.email,
            porte: self.porte,
            data_situacao: self.data_situacao,
            abertura: self.abertura,
            ultima_atualizacao: self.ultima_atualizacao,
            status: self.status,
            motivo_situacao: self.motivo_situacao,
            situacao_especial: self.situacao_especial,
            data_situacao_especial: self.data_situacao_especial,
            capital_social: self.capital_social,
            qsa_qualificacao: socio.qual,
            qsa_nome: socio.nome,
        }
    }
}

/// Blocking HTTP client for the registry.
pub struct RegistryClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
    days: u32,
}

impl RegistryClient {
    pub fn new(params: &LookupParams) -> Result<Self, RegistryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: params.resolved_token(),
            days: params.days,
        })
    }

    /// Point the client at a different host. Used by self-hosted
    /// ReceitaWS deployments.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Look up one identifier. Never fails: any error becomes an error
    /// record for that identifier.
    pub fn lookup(&self, cnpj: &Cnpj) -> LookupRecord {
        match self.fetch(cnpj) {
            Ok(response) => LookupRecord::Company(Box::new(response.into_record())),
            Err(e) => LookupRecord::failed(cnpj.clone(), e.to_string()),
        }
    }

    fn fetch(&self, cnpj: &Cnpj) -> Result<RegistryResponse, RegistryError> {
        let url = format!("{}/v1/cnpj/{}/days/{}", self.base_url, cnpj, self.days);

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status(status.as_u16()));
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE_COMPANY: &str = r#"{
        "cnpj": "12.345.678/0001-95",
        "situacao": "ATIVA",
        "nome": "EMPRESA EXEMPLO LTDA",
        "fantasia": "EXEMPLO",
        "natureza_juridica": "206-2 - Sociedade Empresária Limitada",
        "atividade_principal": [
            {"code": "62.01-5-01", "text": "Desenvolvimento de programas de computador sob encomenda"},
            {"code": "62.02-3-00", "text": "Segunda atividade que deve ser descartada"}
        ],
        "tipo": "MATRIZ",
        "uf": "SP",
        "municipio": "SAO PAULO",
        "abertura": "01/01/2010",
        "capital_social": "100000.00",
        "qsa": [
            {"nome": "FULANO DE TAL", "qual": "49-Sócio-Administrador"},
            {"nome": "BELTRANO", "qual": "22-Sócio"}
        ]
    }"#;

    #[test]
    fn decodes_and_truncates_list_fields() {
        let response: RegistryResponse = serde_json::from_str(ACTIVE_COMPANY).unwrap();
        let record = response.into_record();

        assert_eq!(record.situacao.as_deref(), Some("ATIVA"));
        assert_eq!(record.nome.as_deref(), Some("EMPRESA EXEMPLO LTDA"));
        assert_eq!(
            record.atividade_principal.as_deref(),
            Some("Desenvolvimento de programas de computador sob encomenda")
        );
        assert_eq!(
            record.atividade_principal_codigo.as_deref(),
            Some("62.01-5-01")
        );
        assert_eq!(record.qsa_nome.as_deref(), Some("FULANO DE TAL"));
        assert_eq!(
            record.qsa_qualificacao.as_deref(),
            Some("49-Sócio-Administrador")
        );
        assert_eq!(record.capital_social.as_deref(), Some("100000.00"));
    }

    #[test]
    fn absent_fields_stay_unset() {
        let response: RegistryResponse = serde_json::from_str(r#"{"cnpj": "x"}"#).unwrap();
        let record = response.into_record();

        assert_eq!(record.cnpj.as_deref(), Some("x"));
        assert!(record.situacao.is_none());
        assert!(record.atividade_principal.is_none());
        assert!(record.qsa_nome.is_none());
    }

    #[test]
    fn numeric_capital_social_is_accepted() {
        let response: RegistryResponse =
            serde_json::from_str(r#"{"capital_social": 50000}"#).unwrap();
        assert_eq!(response.capital_social.as_deref(), Some("50000"));
    }

    #[test]
    fn service_error_body_decodes_into_status_fields() {
        let body = r#"{"status": "ERROR", "message": "CNPJ inválido"}"#;
        let response: RegistryResponse = serde_json::from_str(body).unwrap();
        let record = response.into_record();
        assert_eq!(record.status.as_deref(), Some("ERROR"));
    }

    #[test]
    fn status_error_renders_as_http_code() {
        assert_eq!(RegistryError::Status(500).to_string(), "HTTP 500");
        assert_eq!(RegistryError::Status(429).to_string(), "HTTP 429");
    }
}
