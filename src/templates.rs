//! Static document templates.
//!
//! These produce the same kind of text the generation service does, without calling out
//! to a language model: headings are written so that the layout engine recognises them
//! (the contract title, `ARTICLE <n>.` lines and all-caps lines).

use crate::PDFError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parties {
    pub first_party: Party,
    pub second_party: Party,
}

/// What a user fills in for either template. For the contract the first party is the
/// owner and the second the contractor; for the notice they are sender and recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInput {
    pub parties: Parties,
    /// Scope of work, or the subject of a notice
    pub description: String,
    /// Payment terms, or the demands of a notice
    pub terms: String,
    #[serde(default)]
    pub additional_details: Option<String>,
}

pub type GovernmentContractInput = TemplateInput;
pub type GovernmentNoticeInput = TemplateInput;

impl TemplateInput {
    pub fn from_json(json: &str) -> Result<TemplateInput, PDFError> {
        Ok(serde_json::from_str(json)?)
    }

    fn additional_details(&self) -> Option<&str> {
        self.additional_details
            .as_deref()
            .filter(|details| !details.is_empty())
    }
}

/// The templates that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    GovContract,
    GovLegalNotice,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::GovContract, TemplateId::GovLegalNotice];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::GovContract => "gov-contract",
            TemplateId::GovLegalNotice => "gov-legal-notice",
        }
    }

    /// Generate the document dated today
    pub fn generate(&self, input: &TemplateInput) -> String {
        self.generate_dated(input, Local::now().date_naive())
    }

    pub fn generate_dated(&self, input: &TemplateInput, date: NaiveDate) -> String {
        match self {
            TemplateId::GovContract => government_contract_dated(input, date),
            TemplateId::GovLegalNotice => government_legal_notice_dated(input, date),
        }
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown template `{s}`"))
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

const CONTRACT_ARTICLES: [(&str, &str); 7] = [
    (
        "EFFECTIVE DATE FOR DETERMINING TIME FOR COMPLETION",
        "The Completion period of the Project shall be determined from the date of the Letter of Award.",
    ),
    (
        "NON-ASSIGNABILITY",
        "The Contract and benefits and obligations thereof shall be strictly personal to the Contractor and shall not on any account be assignable or transferable by the Contractor.",
    ),
    (
        "GOVERNMENT OF INDIA NOT LIABLE",
        "It is expressly understood and agreed by and between the Contractor and the Owner that the Owner is entering into this Agreement solely on its own behalf and not on behalf of any other person or entity. In particular, it is expressly understood and agreed that the Government of India is not a party to this Agreement and has no liabilities, obligations or rights hereunder. The Contractor expressly agrees, acknowledges and understands that the Owner is not an Agent, Representative or Delegate of the Government of India.",
    ),
    (
        "APPENDICES",
        "The Appendices listed in the attached list of Appendices shall be deemed to form an integral part of this Contract Agreement. Reference in the Contract to any Appendix shall mean the Appendices attached hereto, and the Contract shall be read and construed accordingly.",
    ),
    (
        "NO LIABILITY ON DIRECTOR AND EMPLOYEE",
        "No Director, employee, consultant or agent of the Owner or other person representing the Owner or acting on behalf of the Owner in or pursuant to the Contract or in the discharge of any obligation to the Owner under the Contract or otherwise in relation to the Contract shall have any personal liability to the Contractor or any Sub-Contractor, agent, representative, director or employee of the Contractor.",
    ),
    (
        "WAIVER",
        "No failure or delay by the Owner in enforcing any right or remedy of the Owner in terms of the Contract or any obligation or liability of the Contractor in terms thereof, shall be deemed to be a waiver of such right, remedy, obligation or liability.",
    ),
    (
        "LANGUAGE OF CONTRACT AND COMMUNICATION",
        "The language of the Contract shall be English and all communications, drawings, design, data, information, codes, specifications and other documents whatsoever supporting the bid or otherwise exchanged under the Contract shall be in English.",
    ),
];

const CONTRACT_DOCUMENTS: [&str; 8] = [
    "a) This Contract Agreement and the Appendices hereto",
    "b) Letter of Award (Ref. No.)",
    "c) Amendment to the NIT document",
    "d) Instruction to Bidders",
    "e) Special Conditions of Contract",
    "f) General Conditions of Contract",
    "g) Technical Specifications and Drawings",
    "h) The Bid and Price Schedules submitted by the Bidder",
];

fn signature_block(out: &mut String, party: &str) {
    out.push_str(&format!("Signed for and on behalf of the {party}\n"));
    out.push_str("[Signature]\n[Title]\n");
    out.push_str("in the presence of______________________________\n\n");
}

/// The standard government contract agreement between an owner and a contractor, dated
/// today
pub fn generate_government_contract(input: &GovernmentContractInput) -> String {
    TemplateId::GovContract.generate(input)
}

/// A formal legal notice from the first party to the second, dated today
pub fn generate_government_legal_notice(input: &GovernmentNoticeInput) -> String {
    TemplateId::GovLegalNotice.generate(input)
}

pub fn government_contract_dated(input: &GovernmentContractInput, date: NaiveDate) -> String {
    let TemplateInput {
        parties,
        description,
        terms,
        ..
    } = input;
    let owner = &parties.first_party;
    let contractor = &parties.second_party;

    let mut out = String::new();
    out.push_str("FORMAT OF CONTRACT AGREEMENT\n\n");
    out.push_str("(To be executed on non-judicial stamp paper of appropriate value)\n\n");
    out.push_str(
        "THIS CONTRACT AGREEMENT is made the ____________ day of ___________, 20____.\n\n",
    );
    out.push_str("BETWEEN\n\n");
    out.push_str(&format!(
        "(1) {}, having its principal place of business at {} (hereinafter called \"the Owner\"), and\n",
        owner.name, owner.address
    ));
    out.push_str(&format!(
        "(2) {}, having its principal place of business at {} (hereinafter called \"the Contractor\").\n\n",
        contractor.name, contractor.address
    ));
    out.push_str(&format!(
        "WHEREAS the Owner desires to engage the Contractor to {description} and the Contractor has agreed to such engagement upon and subject to the terms and conditions hereinafter appearing.\n\n"
    ));
    out.push_str("NOW IT IS HEREBY AGREED as follows:\n\n");

    out.push_str("ARTICLE 1. CONTRACT DOCUMENTS\n\n");
    out.push_str("1.1 The following documents shall constitute the Contract between the Owner and the Contractor, and each shall be read and construed as an integral part of the Contract:\n");
    for document in CONTRACT_DOCUMENTS {
        out.push_str(document);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("1.2 Order of Precedence\n");
    out.push_str("In the event of any ambiguity or conflict between the Contract Documents listed above, the order of precedence shall be the order in which the Contract Documents are listed in Article 1.1 above.\n\n");
    out.push_str("1.3 Definitions\n");
    out.push_str("Capitalized words and phrases used herein shall have the same meanings as are ascribed to them in the General Conditions of Contract.\n\n");

    out.push_str("ARTICLE 2. CONTRACT PRICE AND PAYMENT TERMS\n\n");
    out.push_str("2.1 Contract Price\n");
    out.push_str("The Owner hereby agrees to pay to the Contractor the Contract Price in consideration of the performance by the Contractor of its obligations hereunder. The Contract Price shall be as determined in accordance with the terms and conditions of the Contract.\n\n");
    out.push_str("2.2 Payment Terms\n");
    out.push_str(&format!("{terms}\n\n"));

    for (number, (title, body)) in CONTRACT_ARTICLES.iter().enumerate() {
        out.push_str(&format!("ARTICLE {}. {title}\n\n{body}\n\n", number + 3));
    }

    out.push_str("IN WITNESS WHEREOF the Owner and the Contractor have caused this Agreement to be duly executed by their duly authorized representatives the day and year first above written.\n\n");
    signature_block(&mut out, "Owner");
    signature_block(&mut out, "Contractor");
    out.push_str(&format!("Date: {}", format_date(date)));

    if let Some(details) = input.additional_details() {
        out.push_str(&format!("\n\nADDITIONAL DETAILS\n{details}"));
    }

    out
}

pub fn government_legal_notice_dated(input: &GovernmentNoticeInput, date: NaiveDate) -> String {
    let TemplateInput {
        parties,
        description,
        terms,
        ..
    } = input;
    let sender = &parties.first_party;
    let recipient = &parties.second_party;

    let mut out = String::new();
    out.push_str("LEGAL NOTICE\n\n");
    out.push_str(&format!("DATE: {}\n\n", format_date(date)));
    out.push_str(&format!("FROM\n{}\n{}\n\n", sender.name, sender.address));
    out.push_str(&format!("TO\n{}\n{}\n\n", recipient.name, recipient.address));
    out.push_str(&format!("SUBJECT: {description}\n\n"));
    out.push_str(&format!("TAKE NOTICE THAT:\n{terms}\n\n"));
    if let Some(details) = input.additional_details() {
        out.push_str(&format!("ADDITIONAL INFORMATION\n{details}\n\n"));
    }
    out.push_str("You are hereby called upon to comply within the stipulated time, failing which appropriate action may be initiated without further reference.\n\n");
    out.push_str(&format!("Sincerely,\n\n[Signature]\n{}", sender.name));

    out
}
