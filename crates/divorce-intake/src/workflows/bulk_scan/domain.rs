use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DivorceOrDissolution {
    Divorce,
    Dissolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationType {
    SoleApplication,
    JointApplication,
}

impl ApplicationType {
    pub const fn is_sole(self) -> bool {
        matches!(self, Self::SoleApplication)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplementaryCaseType {
    NotApplicable,
    JudicialSeparation,
    Separation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactDetailsType {
    Private,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancialOrderFor {
    Applicant,
    Children,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrayerOrder {
    DissolveDivorce,
    EndCivilPartnership,
    JudicialSeparation,
    Separation,
}

/// Legal grounds for the court's jurisdiction, keyed by the letters printed on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JurisdictionConnection {
    /// Both parties habitually resident.
    A,
    /// Both last habitually resident, one still resident.
    B,
    /// Respondent habitually resident.
    C,
    /// Applicant 1 habitually resident, joint application.
    C1,
    /// Applicant 2 habitually resident, joint application.
    C2,
    /// Applicant habitually resident for at least a year.
    D,
    /// Applicant domiciled and habitually resident for at least six months.
    E,
    /// Both parties domiciled.
    F,
    /// Residual jurisdiction, civil partnership.
    G,
    /// Applicant 1 domiciled.
    H,
    /// Applicant 2 domiciled.
    I,
    /// Residual jurisdiction, marriage.
    J,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "feePayByPhone")]
    Phone,
    #[serde(rename = "feePayByChequeOrPostalOrder")]
    ChequeOrPostalOrder,
}

/// Draft case aggregate built up by the section stages. Subtrees stay `None` until the
/// stage that owns them has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub divorce_or_dissolution: Option<DivorceOrDissolution>,
    pub application_type: Option<ApplicationType>,
    pub supplementary_case_type: SupplementaryCaseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant1: Option<Applicant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant2: Option<Applicant>,
    #[serde(flatten)]
    pub application: Option<Application>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_order: Option<ConditionalOrder>,
    #[serde(flatten)]
    pub paper_form_details: Option<PaperFormDetails>,
}

impl Default for CaseRecord {
    fn default() -> Self {
        Self {
            divorce_or_dissolution: None,
            application_type: None,
            supplementary_case_type: SupplementaryCaseType::NotApplicable,
            applicant1: None,
            applicant2: None,
            application: None,
            conditional_order: None,
            paper_form_details: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name_different_to_marriage_certificate: Option<YesOrNo>,
    pub name_change_reason: Option<String>,
    pub contact_details_type: Option<ContactDetailsType>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address_overseas: Option<YesOrNo>,
    pub solicitor_represented: Option<YesOrNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitor: Option<Solicitor>,
    pub financial_order: Option<YesOrNo>,
    pub financial_order_for: BTreeSet<FinancialOrderFor>,
    pub legal_proceedings: Option<YesOrNo>,
    pub legal_proceedings_details: Option<String>,
    pub statement_of_truth: Option<YesOrNo>,
    pub solicitor_statement_of_truth: Option<YesOrNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prayer: Option<Prayer>,
    pub offline: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solicitor {
    pub name: Option<String>,
    pub firm_name: Option<String>,
    pub address: Option<String>,
    pub reference: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    pub orders: Option<BTreeSet<PrayerOrder>>,
    pub financial_orders: Option<BTreeSet<FinancialOrderFor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub jurisdiction: Jurisdiction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage: Option<MarriageDetails>,
    pub applicant1_help_with_fees: HelpWithFees,
    pub applicant2_help_with_fees: HelpWithFees,
    pub applicant1_confirmed_broken_down: Option<YesOrNo>,
    pub applicant2_confirmed_broken_down: Option<YesOrNo>,
    pub new_paper_case: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    pub connections: BTreeSet<JurisdictionConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpWithFees {
    pub reference_number: Option<String>,
    pub need_help: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageDetails {
    pub married_in_uk: Option<YesOrNo>,
    pub without_certificate: Option<YesOrNo>,
    pub certificate_in_english: Option<YesOrNo>,
    pub certified_translation: Option<YesOrNo>,
    pub place_of_marriage: Option<String>,
    pub country_of_marriage: Option<String>,
    pub applicant1_name: Option<String>,
    pub applicant2_name: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalOrder {
    pub applicant1_is_drafted: Option<YesOrNo>,
    pub applicant1_is_submitted: Option<YesOrNo>,
    pub applicant2_is_drafted: Option<YesOrNo>,
    pub applicant2_is_submitted: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperFormDetails {
    pub serve_by_post: Option<YesOrNo>,
    pub applicant_will_serve: Option<YesOrNo>,
    pub different_service_address: Option<YesOrNo>,
    pub applicant1_statement_of_truth: StatementOfTruthDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant2_statement_of_truth: Option<StatementOfTruthDetails>,
    pub payment_method: Option<PaymentMethod>,
    pub how_to_pay_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementOfTruthDetails {
    pub signing: Option<YesOrNo>,
    pub legal_rep_signing: Option<YesOrNo>,
    pub date: Option<String>,
    pub full_name: Option<String>,
    pub firm_name: Option<String>,
    pub position: Option<String>,
}
