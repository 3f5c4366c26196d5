//! Commands that change journal entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Edit of an existing journal entry (EndreJournalpostCommand)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditJournalEntryCommand {
    #[serde(rename = "journalpostId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "avsenderNavn", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(rename = "behandlingstema", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "dokumentDato", skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
    #[serde(rename = "endreDokumenter", default)]
    pub document_edits: Vec<EditDocument>,
    #[serde(rename = "fagomrade", skip_serializing_if = "Option::is_none")]
    pub domain_area: Option<String>,
    #[serde(rename = "gjelder", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "gjelderType", skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(rename = "journalforendeEnhet", skip_serializing_if = "Option::is_none")]
    pub routing_unit: Option<String>,
    #[serde(rename = "tilknyttSaker", default)]
    pub linked_cases: Vec<String>,
    #[serde(rename = "tittel", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "mottattDato", skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDate>,
    /// Ask the backend to file the entry as part of the edit
    #[serde(rename = "skalJournalfores", default)]
    pub file_entry: bool,
}

/// Registration of an incoming journal entry (RegistrereJournalpostCommand).
///
/// Registration is carried out as an edit, see
/// `JournalpostService::register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterJournalEntryCommand {
    #[serde(rename = "journalpostId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "avsenderNavn", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(rename = "behandlingstema", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "dokumentDato", skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
    #[serde(rename = "endreDokumenter", default)]
    pub document_edits: Vec<EditDocument>,
    #[serde(rename = "fagomrade", skip_serializing_if = "Option::is_none")]
    pub domain_area: Option<String>,
    #[serde(rename = "gjelder", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "gjelderType", skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(rename = "journalforendeEnhet", skip_serializing_if = "Option::is_none")]
    pub routing_unit: Option<String>,
    #[serde(rename = "saksnummer", default)]
    pub case_numbers: Vec<String>,
    #[serde(rename = "tittel", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Change to a single document in an edit command (EndreDokument)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditDocument {
    #[serde(rename = "brevkode", skip_serializing_if = "Option::is_none")]
    pub letter_code: Option<String>,
    #[serde(rename = "dokId", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(rename = "tittel", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
