//! schema.org node types.
//!
//! Every struct serializes to one JSON-LD object. `@type` is carried as a
//! [`SchemaType`] field so each node names its vocabulary type explicitly.

use serde::Serialize;

/// JSON-LD `@context` for every top-level object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org type names emitted as `@type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    BlogPosting,
    WebSite,
    WebPage,
    AboutPage,
    ContactPage,
    Organization,
    Person,
    ImageObject,
    SearchAction,
    BreadcrumbList,
    ItemList,
    ListItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::ImageObject,
            url: url.into(),
        }
    }
}

/// Organization reference used as `publisher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationNode {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl OrganizationNode {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::Organization,
            id: None,
            name: name.into(),
            url: url.into(),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(ImageObject::new(logo));
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Author or founder: a person, or the organization itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Agent {
    Person {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Organization {
        name: String,
        url: String,
    },
}

/// `mainEntityOfPage` self-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

impl SearchAction {
    /// Site search at `<base>/search?q=…`.
    pub fn for_site(base_url: &str) -> Self {
        Self {
            schema_type: SchemaType::SearchAction,
            target: format!("{base_url}/search?q={{search_term_string}}"),
            query_input: "required name=search_term_string",
        }
    }
}

/// Page-level object from `generate_schema`.
///
/// Branch-only fields are `None` for kinds that do not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub in_language: String,
    pub publisher: OrganizationNode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Agent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

/// `BreadcrumbList` or `ItemList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList<T> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub item_list_element: Vec<ListItem<T>>,
}

impl<T> ItemList<T> {
    /// Wrap items in list elements with 1-based positions, keeping order.
    pub fn new(schema_type: SchemaType, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema_type,
            item_list_element: items
                .into_iter()
                .enumerate()
                .map(|(index, item)| ListItem {
                    schema_type: SchemaType::ListItem,
                    position: index + 1,
                    item,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem<T> {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub position: usize,
    pub item: T,
}

/// Breadcrumb target: `{ "@id": url, "name": … }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
}

/// `BlogPosting` summary inside an article `ItemList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: String,
    pub date_modified: String,
    pub author: Agent,
    pub image: String,
    pub publisher: OrganizationNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
    pub description: String,
    pub founding_date: String,
    pub founder: Vec<Agent>,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub in_language: String,
    pub publisher: OrganizationNode,
    pub potential_action: SearchAction,
}
