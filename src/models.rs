use serde::{Deserialize, Serialize};

// ============ Lookup Results ============

/// Result of a combined person + company lookup.
///
/// Either side may be missing: an email on a free provider usually resolves a
/// person but no company, and `"company": null` on the wire stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub person: Option<Person>,
    pub company: Option<Company>,
}

/// A person profile as returned by the enrichment API.
///
/// Every field is optional; the API omits whatever it does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Clearbit-assigned identifier.
    pub id: Option<String>,
    /// Structured name.
    pub name: Option<Name>,
    /// Email address the profile was found for.
    pub email: Option<String>,
    /// Gender, e.g. "male" or "female".
    pub gender: Option<String>,
    /// Free-text location, e.g. "San Francisco, CA, US".
    pub location: Option<String>,
    /// IANA time zone, e.g. "America/Los_Angeles".
    pub time_zone: Option<String>,
    /// Offset from UTC in hours.
    pub utc_offset: Option<i32>,
    /// Structured location.
    pub geo: Option<Geo>,
    /// Short biography.
    pub bio: Option<String>,
    /// Personal website URL.
    pub site: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Current job.
    pub employment: Option<Employment>,
    pub facebook: Option<HandleProfile>,
    pub github: Option<GitHub>,
    pub twitter: Option<Twitter>,
    pub linkedin: Option<HandleProfile>,
    pub googleplus: Option<HandleProfile>,
    pub aboutme: Option<AboutMe>,
    pub gravatar: Option<Gravatar>,
    /// True when the match is probabilistic rather than exact.
    pub fuzzy: Option<bool>,
}

/// A company profile as returned by the enrichment API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Clearbit-assigned identifier.
    pub id: Option<String>,
    /// Commonly used name.
    pub name: Option<String>,
    /// Registered legal name.
    pub legal_name: Option<String>,
    /// Primary domain, e.g. "stripe.com".
    pub domain: Option<String>,
    /// Other domains owned by the company.
    pub domain_aliases: Option<Vec<String>>,
    pub url: Option<String>,
    /// Metadata crawled from the company website.
    pub site: Option<Site>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    /// Founding date as reported, usually "YYYY-MM-DD".
    pub founded_date: Option<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<i32>,
    pub geo: Option<Geo>,
    /// Logo image URL.
    pub logo: Option<String>,
    pub facebook: Option<HandleProfile>,
    pub linkedin: Option<HandleProfile>,
    pub twitter: Option<CompanyTwitter>,
    pub crunchbase: Option<HandleProfile>,
    /// True when the domain belongs to a webmail provider (gmail.com etc.).
    pub email_provider: Option<bool>,
    /// Company type, e.g. "public", "private", "education".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Stock ticker for public companies.
    pub ticker: Option<String>,
    pub phone: Option<String>,
    pub metrics: Option<Metrics>,
    /// Detected technology stack, e.g. "google_analytics".
    pub tech: Option<Vec<String>>,
}

// ============ Shared Structures ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// Structured address with coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    /// Suite, floor or unit.
    pub sub_premise: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// The person's current job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    /// Employer domain.
    pub domain: Option<String>,
    /// Employer name.
    pub name: Option<String>,
    pub title: Option<String>,
    /// Functional role, e.g. "engineering".
    pub role: Option<String>,
    /// Seniority level, e.g. "executive".
    pub seniority: Option<String>,
}

/// Industry taxonomy of a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub sector: Option<String>,
    pub industry_group: Option<String>,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
}

/// Size, traffic and financial figures for a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub alexa_us_rank: Option<i64>,
    pub alexa_global_rank: Option<i64>,
    pub google_rank: Option<i64>,
    pub employees: Option<i64>,
    pub market_cap: Option<f64>,
    /// Total funding raised, in USD.
    pub raised: Option<f64>,
    pub annual_revenue: Option<f64>,
}

/// Metadata crawled from a company website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub url: Option<String>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub meta_description: Option<String>,
    pub meta_author: Option<String>,
    /// Phone numbers found on the site.
    pub phone_numbers: Option<Vec<String>>,
    /// Email addresses found on the site.
    pub email_addresses: Option<Vec<String>>,
}

// ============ Social Profiles ============

/// A network that only exposes a handle (Facebook, LinkedIn, Google+, Crunchbase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandleProfile {
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitHub {
    pub handle: Option<String>,
    pub id: Option<i64>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
}

/// Twitter profile of a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Twitter {
    pub handle: Option<String>,
    pub id: Option<i64>,
    pub bio: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub statuses: Option<i64>,
    pub favorites: Option<i64>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
}

/// Twitter profile of a company. The id comes back as a string here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyTwitter {
    pub handle: Option<String>,
    pub id: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gravatar {
    pub handle: Option<String>,
    pub urls: Option<Vec<GravatarUrl>>,
    /// Primary avatar URL.
    pub avatar: Option<String>,
    pub avatars: Option<Vec<GravatarAvatar>>,
}

/// A link listed on a Gravatar profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GravatarUrl {
    pub value: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GravatarAvatar {
    pub url: Option<String>,
    /// Avatar kind, e.g. "thumbnail".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutMe {
    pub handle: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}
