//! schema.org JSON-LD derivation.
//!
//! | Function | Output `@type` |
//! |----------|----------------|
//! | [`generate_schema`] | `BlogPosting`, `WebSite`, `WebPage`, `AboutPage`, `ContactPage` |
//! | [`breadcrumb_schema`] | `BreadcrumbList` |
//! | [`organization_schema`] | `Organization` (with `@id`) |
//! | [`website_schema`] | `WebSite` (with `@id`) |
//! | [`article_list_schema`] | `ItemList` of `BlogPosting` |
//!
//! Page kinds form the closed enum [`SchemaKind`]. A kind outside that set
//! cannot be constructed, so string inputs are rejected where they are
//! parsed (see `cli::PageKind`).

mod nodes;

pub use nodes::{
    Agent, ArticleSummary, Crumb, ImageObject, ItemList, ListItem, OrganizationNode,
    OrganizationSchema, PageSchema, SCHEMA_CONTEXT, SchemaType, SearchAction, WebPageRef,
    WebSiteSchema,
};

use crate::{
    config::{OrganizationConfig, SiteConfig},
    content::{Author, Post},
    utils::{
        date::to_iso,
        url::{absolutize, post_url, site_url},
    },
};
use serde::Serialize;

// ============================================================================
// Input
// ============================================================================

/// Page kind with its branch-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    BlogPosting(ArticleData),
    WebSite,
    WebPage,
    AboutPage,
    ContactPage,
}

impl SchemaKind {
    pub const fn schema_type(&self) -> SchemaType {
        match self {
            Self::BlogPosting(_) => SchemaType::BlogPosting,
            Self::WebSite => SchemaType::WebSite,
            Self::WebPage => SchemaType::WebPage,
            Self::AboutPage => SchemaType::AboutPage,
            Self::ContactPage => SchemaType::ContactPage,
        }
    }
}

/// Fields only a `BlogPosting` uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleData {
    pub image: Option<String>,
    pub date_published: Option<String>,
    /// Falls back to `date_published`.
    pub date_modified: Option<String>,
    /// `None` credits the publishing organization.
    pub author: Option<Author>,
}

impl ArticleData {
    pub fn from_post(post: &Post) -> Self {
        let entry = &post.entry;
        Self {
            image: entry.image.clone(),
            date_published: Some(to_iso(&entry.published_date)),
            date_modified: entry.modified_date.as_ref().map(to_iso),
            author: Some(entry.author.clone()),
        }
    }
}

/// Publisher override for [`SchemaOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRef {
    pub name: String,
    pub url: String,
    pub logo: String,
}

impl From<&OrganizationConfig> for OrganizationRef {
    fn from(org: &OrganizationConfig) -> Self {
        Self {
            name: org.name.clone(),
            url: org.url.clone(),
            logo: org.logo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    pub kind: SchemaKind,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Defaults to `[organization]` from the config.
    pub organization: Option<OrganizationRef>,
}

impl SchemaOptions {
    /// `BlogPosting` options for a post at its canonical URL.
    pub fn for_post(post: &Post, config: &SiteConfig) -> Self {
        Self {
            kind: SchemaKind::BlogPosting(ArticleData::from_post(post)),
            title: post.entry.title.clone(),
            description: post.entry.description.clone(),
            url: post_url(config, &post.slug),
            organization: None,
        }
    }
}

/// One breadcrumb step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Derivers
// ============================================================================

/// Derive the JSON-LD object for one page.
pub fn generate_schema(options: &SchemaOptions, config: &SiteConfig) -> PageSchema {
    let organization = options
        .organization
        .clone()
        .unwrap_or_else(|| OrganizationRef::from(&config.organization));

    let mut schema = PageSchema {
        context: SCHEMA_CONTEXT,
        schema_type: options.kind.schema_type(),
        headline: options.title.clone(),
        description: options.description.clone(),
        url: options.url.clone(),
        in_language: config.base.language.clone(),
        publisher: OrganizationNode::new(&organization.name, &organization.url)
            .with_logo(&organization.logo),
        main_entity_of_page: None,
        image: None,
        date_published: None,
        date_modified: None,
        author: None,
        potential_action: None,
    };

    match &options.kind {
        SchemaKind::BlogPosting(article) => {
            schema.main_entity_of_page = Some(WebPageRef {
                schema_type: SchemaType::WebPage,
                id: options.url.clone(),
            });
            schema.image = Some(
                article
                    .image
                    .as_deref()
                    .filter(|image| !image.is_empty())
                    .map(|image| absolutize(config, image))
                    .unwrap_or_else(|| config.base.default_image.clone()),
            );
            schema.date_published = article.date_published.clone();
            schema.date_modified = article
                .date_modified
                .clone()
                .or_else(|| article.date_published.clone());
            schema.author = Some(match &article.author {
                Some(author) => Agent::Person {
                    name: author.name.clone(),
                    url: author.url.clone(),
                },
                None => Agent::Organization {
                    name: organization.name,
                    url: organization.url,
                },
            });
        }
        SchemaKind::WebSite => {
            schema.potential_action = Some(SearchAction::for_site(&config.base.url));
        }
        SchemaKind::WebPage | SchemaKind::AboutPage | SchemaKind::ContactPage => {}
    }

    schema
}

/// `BreadcrumbList` with one element per item, positions starting at 1.
pub fn breadcrumb_schema(items: &[BreadcrumbItem]) -> ItemList<Crumb> {
    ItemList::new(
        SchemaType::BreadcrumbList,
        items.iter().map(|item| Crumb {
            id: item.url.clone(),
            name: item.name.clone(),
        }),
    )
}

/// Home → Blog → post trail for a blog post.
pub fn post_breadcrumbs(post: &Post, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new(&config.base.home_title, site_url(config, "/")),
        BreadcrumbItem::new("Blog", site_url(config, "/blog/")),
        BreadcrumbItem::new(&post.entry.title, post_url(config, &post.slug)),
    ]
}

/// Site-wide `Organization` node, identified as `<org url>#organization`.
pub fn organization_schema(config: &SiteConfig) -> OrganizationSchema {
    let org = &config.organization;
    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        schema_type: SchemaType::Organization,
        id: organization_id(config),
        name: org.name.clone(),
        url: org.url.clone(),
        logo: ImageObject::new(&org.logo),
        description: org.description.clone(),
        founding_date: org.founding_date.clone(),
        founder: org
            .founders
            .iter()
            .map(|founder| Agent::Person {
                name: founder.name.clone(),
                url: founder.url.clone(),
            })
            .collect(),
        same_as: config.social.profile_urls(),
    }
}

/// Site-wide `WebSite` node, identified as `<base>#website`.
pub fn website_schema(config: &SiteConfig) -> WebSiteSchema {
    let base = &config.base;
    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        schema_type: SchemaType::WebSite,
        id: format!("{}#website", base.url),
        name: base.title.clone(),
        description: base.description.clone(),
        url: base.url.clone(),
        in_language: base.language.clone(),
        publisher: OrganizationNode::new(&config.organization.name, &config.organization.url)
            .with_id(organization_id(config)),
        potential_action: SearchAction::for_site(&base.url),
    }
}

/// `ItemList` of `BlogPosting` summaries in the given order.
///
/// Sorting and draft filtering are the caller's job; see `content::published`.
pub fn article_list_schema(posts: &[&Post], config: &SiteConfig) -> ItemList<ArticleSummary> {
    let org = &config.organization;
    ItemList::new(
        SchemaType::ItemList,
        posts.iter().map(|post| {
            let entry = &post.entry;
            ArticleSummary {
                schema_type: SchemaType::BlogPosting,
                headline: entry.title.clone(),
                description: entry.description.clone(),
                url: post_url(config, &post.slug),
                date_published: to_iso(&entry.published_date),
                date_modified: to_iso(&entry.modified()),
                author: Agent::Person {
                    name: entry.author.name.clone(),
                    url: entry.author.url.clone(),
                },
                image: entry
                    .image
                    .as_deref()
                    .filter(|image| !image.is_empty())
                    .map(|image| absolutize(config, image))
                    .unwrap_or_else(|| config.base.default_image.clone()),
                publisher: OrganizationNode::new(&org.name, &org.url).with_logo(&org.logo),
            }
        }),
    )
}

/// Embed a JSON-LD value in a `<script type="application/ld+json">` tag.
///
/// `</` is escaped so string values cannot close the script element.
pub fn script_tag<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?.replace("</", "<\\/");
    Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
}

fn organization_id(config: &SiteConfig) -> String {
    format!("{}#organization", config.organization.url)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::tests::sample_config, content::tests::make_post};
    use serde_json::json;

    fn options(kind: SchemaKind) -> SchemaOptions {
        SchemaOptions {
            kind,
            title: "Belajar Astro".into(),
            description: "Pengenalan Astro".into(),
            url: "https://hilaltechnologic.info/blog/belajar-astro/".into(),
            organization: None,
        }
    }

    #[test]
    fn test_base_fields() {
        let config = sample_config();
        let json = serde_json::to_value(generate_schema(&options(SchemaKind::WebPage), &config)).unwrap();

        assert_eq!(
            json,
            json!({
                "@context": "https://schema.org",
                "@type": "WebPage",
                "headline": "Belajar Astro",
                "description": "Pengenalan Astro",
                "url": "https://hilaltechnologic.info/blog/belajar-astro/",
                "inLanguage": "id",
                "publisher": {
                    "@type": "Organization",
                    "name": "Hilal Technologic",
                    "url": "https://hilaltechnologic.info",
                    "logo": {
                        "@type": "ImageObject",
                        "url": "https://hilaltechnologic.info/images/logo.png"
                    }
                }
            })
        );
    }

    #[test]
    fn test_about_and_contact_are_base_only() {
        let config = sample_config();
        for kind in [SchemaKind::AboutPage, SchemaKind::ContactPage] {
            let expected = kind.schema_type();
            let schema = generate_schema(&options(kind), &config);
            assert_eq!(schema.schema_type, expected);
            assert!(schema.main_entity_of_page.is_none());
            assert!(schema.potential_action.is_none());
            assert!(schema.author.is_none());
        }
    }

    #[test]
    fn test_blog_posting_modified_falls_back_to_published() {
        let config = sample_config();
        let article = ArticleData {
            date_published: Some("2024-01-15T00:00:00.000Z".into()),
            ..ArticleData::default()
        };
        let schema = generate_schema(&options(SchemaKind::BlogPosting(article)), &config);

        assert_eq!(schema.date_published.as_deref(), Some("2024-01-15T00:00:00.000Z"));
        assert_eq!(schema.date_modified, schema.date_published);
    }

    #[test]
    fn test_blog_posting_fields() {
        let config = sample_config();
        let article = ArticleData {
            image: Some("/images/astro.jpg".into()),
            date_published: Some("2024-01-15".into()),
            date_modified: Some("2024-02-01".into()),
            author: Some(Author {
                name: "Hilal".into(),
                url: Some("https://hilaltechnologic.info/author/admin".into()),
            }),
        };
        let json = serde_json::to_value(generate_schema(
            &options(SchemaKind::BlogPosting(article)),
            &config,
        ))
        .unwrap();

        assert_eq!(json["@type"], "BlogPosting");
        assert_eq!(
            json["mainEntityOfPage"],
            json!({"@type": "WebPage", "@id": "https://hilaltechnologic.info/blog/belajar-astro/"})
        );
        assert_eq!(json["image"], "https://hilaltechnologic.info/images/astro.jpg");
        assert_eq!(json["dateModified"], "2024-02-01");
        assert_eq!(
            json["author"],
            json!({
                "@type": "Person",
                "name": "Hilal",
                "url": "https://hilaltechnologic.info/author/admin"
            })
        );
    }

    #[test]
    fn test_blog_posting_without_author_credits_publisher() {
        let config = sample_config();
        let schema = generate_schema(
            &options(SchemaKind::BlogPosting(ArticleData::default())),
            &config,
        );

        assert_eq!(
            schema.author,
            Some(Agent::Organization {
                name: "Hilal Technologic".into(),
                url: "https://hilaltechnologic.info".into(),
            })
        );
        assert_eq!(
            schema.image.as_deref(),
            Some("https://hilaltechnologic.info/images/og-default.jpg")
        );
        assert!(schema.date_published.is_none());
        assert!(schema.date_modified.is_none());
    }

    #[test]
    fn test_person_author_without_url_omits_url() {
        let author = Agent::Person {
            name: "Hilal".into(),
            url: None,
        };
        assert_eq!(
            serde_json::to_value(author).unwrap(),
            json!({"@type": "Person", "name": "Hilal"})
        );
    }

    #[test]
    fn test_publisher_override() {
        let config = sample_config();
        let opts = SchemaOptions {
            organization: Some(OrganizationRef {
                name: "Partner".into(),
                url: "https://partner.example".into(),
                logo: "https://partner.example/logo.png".into(),
            }),
            ..options(SchemaKind::BlogPosting(ArticleData::default()))
        };
        let schema = generate_schema(&opts, &config);

        assert_eq!(schema.publisher.name, "Partner");
        assert_eq!(
            schema.author,
            Some(Agent::Organization {
                name: "Partner".into(),
                url: "https://partner.example".into(),
            })
        );
    }

    #[test]
    fn test_website_search_action() {
        let config = sample_config();
        let json = serde_json::to_value(generate_schema(&options(SchemaKind::WebSite), &config)).unwrap();

        assert_eq!(
            json["potentialAction"],
            json!({
                "@type": "SearchAction",
                "target": "https://hilaltechnologic.info/search?q={search_term_string}",
                "query-input": "required name=search_term_string"
            })
        );
        assert!(json.get("mainEntityOfPage").is_none());
    }

    #[test]
    fn test_breadcrumb_positions() {
        let items = vec![
            BreadcrumbItem::new("Home", "/"),
            BreadcrumbItem::new("Blog", "/blog/"),
        ];
        let json = serde_json::to_value(breadcrumb_schema(&items)).unwrap();

        assert_eq!(
            json,
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "item": {"@id": "/", "name": "Home"}},
                    {"@type": "ListItem", "position": 2, "item": {"@id": "/blog/", "name": "Blog"}}
                ]
            })
        );
    }

    #[test]
    fn test_breadcrumb_empty() {
        assert!(breadcrumb_schema(&[]).item_list_element.is_empty());
    }

    #[test]
    fn test_post_breadcrumbs() {
        let config = sample_config();
        let post = make_post("belajar-astro", "2024-01-15", false);
        let crumbs = post_breadcrumbs(&post, &config);

        assert_eq!(crumbs[0], BreadcrumbItem::new("Beranda", "https://hilaltechnologic.info/"));
        assert_eq!(crumbs[2].url, "https://hilaltechnologic.info/blog/belajar-astro/");
    }

    #[test]
    fn test_organization_schema() {
        let config = sample_config();
        let json = serde_json::to_value(organization_schema(&config)).unwrap();

        assert_eq!(json["@id"], "https://hilaltechnologic.info#organization");
        assert_eq!(json["foundingDate"], "2024-01-01");
        assert_eq!(
            json["founder"],
            json!([{
                "@type": "Person",
                "name": "Hilal Technologic Blog",
                "url": "https://hilaltechnologic.info/author/admin"
            }])
        );
        assert_eq!(
            json["sameAs"],
            json!([
                "https://twitter.com/hilaltechnologi",
                "https://github.com/hilaltechnologic"
            ])
        );
    }

    #[test]
    fn test_website_schema() {
        let config = sample_config();
        let schema = website_schema(&config);

        assert_eq!(schema.id, "https://hilaltechnologic.info#website");
        assert_eq!(
            schema.publisher.id.as_deref(),
            Some("https://hilaltechnologic.info#organization")
        );
        assert!(schema.publisher.logo.is_none());
        assert_eq!(schema, website_schema(&config));
    }

    #[test]
    fn test_article_list_preserves_order() {
        let config = sample_config();
        let mut older = make_post("older", "2023-06-01", false);
        older.entry.image = Some("https://cdn.example.com/a.jpg".into());
        let newer = make_post("newer", "2024-06-01", false);

        let list = article_list_schema(&[&older, &newer], &config);

        assert_eq!(list.schema_type, SchemaType::ItemList);
        let positions: Vec<_> = list.item_list_element.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(list.item_list_element[0].item.headline, "Post older");
        assert_eq!(list.item_list_element[0].item.image, "https://cdn.example.com/a.jpg");
        assert_eq!(
            list.item_list_element[1].item.image,
            "https://hilaltechnologic.info/images/og-default.jpg"
        );
        assert_eq!(
            list.item_list_element[1].item.date_modified,
            "2024-06-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_for_post_options() {
        let config = sample_config();
        let post = make_post("belajar-astro", "2024-01-15", true);
        let schema = generate_schema(&SchemaOptions::for_post(&post, &config), &config);

        assert_eq!(schema.url, "https://hilaltechnologic.info/blog/belajar-astro/");
        assert_eq!(schema.date_modified.as_deref(), Some("2024-01-15T00:00:00.000Z"));
    }

    #[test]
    fn test_script_tag_escapes_closing_tag() {
        let value = json!({"headline": "</script><b>"});
        let tag = script_tag(&value).unwrap();

        assert!(tag.starts_with(r#"<script type="application/ld+json">"#));
        assert!(tag.ends_with("</script>"));
        assert!(tag.contains(r"<\/script><b>"));
        assert_eq!(tag.matches("</script>").count(), 1);
    }
}
