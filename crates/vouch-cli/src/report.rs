//! Report structures for the inspect commands
//!
//! Each report is built once from a decoded record, then rendered either as
//! text or as JSON (`--json`).

use serde::Serialize;

use vouch_core::{KeyRecord, PublicKeyRecord, SignatureRecord, Timestamp, FORMAT_VERSION};

/// One certification entry in a report
#[derive(Debug, Serialize)]
pub struct CertificationReport {
    /// Identifier of the certifying key
    pub certifier_id: String,
    /// Certifier signature, hex encoded
    pub signature: String,
    /// True when the certifier is the record's own identifier
    pub self_certification: bool,
    /// Validity where checkable: the self-certification always is; other
    /// entries only when the certifier's public key was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Report for `key-info`
#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub kind: String,
    pub version: u8,
    pub name: String,
    pub id: String,
    pub expires: String,
    pub expired: bool,
    /// Private records only: identifier of the derived public key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    /// Public records only: self-signature, hex encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Public records only: whether a valid self-certification is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<CertificationReport>,
}

impl KeyReport {
    /// Build a report from a decoded key record
    pub fn from_record(record: &KeyRecord) -> Self {
        match record {
            KeyRecord::Private(private) => Self {
                kind: record.kind().to_string(),
                version: FORMAT_VERSION,
                name: private.info().name.clone(),
                id: private.id().to_string(),
                expires: format_timestamp(private.info().expires),
                expired: private.is_expired(),
                public_id: Some(private.public_id().to_string()),
                signature: None,
                self_signed: None,
                certifications: Vec::new(),
            },
            KeyRecord::Public(public) => Self {
                kind: record.kind().to_string(),
                version: FORMAT_VERSION,
                name: public.info().name.clone(),
                id: public.id().to_string(),
                expires: format_timestamp(public.info().expires),
                expired: public.info().is_expired(),
                public_id: None,
                signature: Some(hex::encode(public.signature())),
                self_signed: Some(public.is_self_certified()),
                certifications: certification_reports(public, None),
            },
        }
    }

    /// Render the report as human-readable text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Type: {}\n", self.kind));
        out.push_str(&format!("Version: {}\n\n", self.version));
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("ID: {}\n", self.id));
        out.push_str(&format!(
            "Expires: {} ({})\n",
            self.expires,
            if self.expired { "expired" } else { "valid" }
        ));

        if let Some(public_id) = &self.public_id {
            out.push_str(&format!("\nPublic-ID: {public_id}\n"));
        }
        if let Some(signature) = &self.signature {
            out.push_str(&format!("\nSignature: {signature}\n"));
        }
        if let Some(self_signed) = self.self_signed {
            out.push_str(&format!("Self-Signed: {self_signed}\n"));
        }
        if !self.certifications.is_empty() {
            out.push_str("Certifications:\n");
            for certification in &self.certifications {
                out.push_str(&format!("  {}\n", certification.describe()));
            }
        }

        out
    }
}

/// Report for `signature-info`
#[derive(Debug, Serialize)]
pub struct SignatureReport {
    pub signer_id: String,
    pub signature: String,
}

impl SignatureReport {
    /// Build a report from a decoded signature record
    pub fn from_record(record: &SignatureRecord) -> Self {
        Self {
            signer_id: record.signer_id.to_string(),
            signature: hex::encode(record.signature),
        }
    }

    /// Render the report as human-readable text
    pub fn render(&self) -> String {
        format!(
            "Signed-By: {}\nSignature: {}\n",
            self.signer_id, self.signature
        )
    }
}

/// Report for `certification-info`
#[derive(Debug, Serialize)]
pub struct CertificationsReport {
    pub holder_id: String,
    pub holder_name: String,
    pub certifications: Vec<CertificationReport>,
}

impl CertificationsReport {
    /// Build a report for `holder`'s certifications, checking validity
    /// against `certifier` where one was supplied
    pub fn from_record(holder: &PublicKeyRecord, certifier: Option<&PublicKeyRecord>) -> Self {
        Self {
            holder_id: holder.id().to_string(),
            holder_name: holder.info().name.clone(),
            certifications: certification_reports(holder, certifier),
        }
    }

    /// Render the report as human-readable text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Certifications for {} ({}):\n",
            self.holder_id, self.holder_name
        ));
        if self.certifications.is_empty() {
            out.push_str("  (none)\n");
        }
        for certification in &self.certifications {
            out.push_str(&format!("  {}\n", certification.describe()));
        }
        out
    }
}

impl CertificationReport {
    fn describe(&self) -> String {
        let origin = if self.self_certification {
            "self"
        } else {
            "third-party"
        };
        let validity = match self.valid {
            Some(true) => "valid",
            Some(false) => "invalid",
            None => "unchecked",
        };
        format!("{} ({origin}, {validity})", self.certifier_id)
    }
}

/// Collect certification entries, validating the ones that are checkable
fn certification_reports(
    holder: &PublicKeyRecord,
    certifier: Option<&PublicKeyRecord>,
) -> Vec<CertificationReport> {
    holder
        .certifications()
        .values()
        .map(|certification| {
            let self_certification = certification.certifier_id == holder.id();
            let valid = if self_certification {
                Some(certification.is_valid(holder.key()))
            } else {
                certifier
                    .filter(|record| record.id() == certification.certifier_id)
                    .map(|record| certification.is_valid(record.key()))
            };
            CertificationReport {
                certifier_id: certification.certifier_id.to_string(),
                signature: hex::encode(certification.signature),
                self_certification,
                valid,
            }
        })
        .collect()
}

/// Render a timestamp as RFC 3339, falling back to raw epoch seconds for
/// out-of-range values
fn format_timestamp(timestamp: Timestamp) -> String {
    chrono::DateTime::from_timestamp(timestamp.as_secs() as i64, 0)
        .map(|datetime| datetime.to_rfc3339())
        .unwrap_or_else(|| timestamp.to_string())
}
