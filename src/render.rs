use askama::Template;

use crate::error::SiteError;
use crate::listing::Listing;
use crate::models::Item;

/// The shared page layout. The index page fills the four listing views, the
/// past page only fills `all_past_workshops`.
#[derive(Template, Default)]
#[template(path = "listing.html")]
pub struct ListingPage<'a> {
    pub title: &'a str,
    pub coming_soon: Vec<&'a Item>,
    pub past_workshops: Vec<&'a Item>,
    pub self_paced: Vec<&'a Item>,
    pub recorded_workshops: Vec<&'a Item>,
    pub all_past_workshops: Vec<&'a Item>,
    pub past_preview: usize,
}

impl<'a> ListingPage<'a> {
    pub fn index(title: &'a str, listing: &Listing<'a>, past_preview: usize) -> Self {
        Self {
            title,
            coming_soon: listing.coming_soon.clone(),
            past_workshops: listing.past_workshops.clone(),
            self_paced: listing.self_paced.clone(),
            recorded_workshops: listing.recorded_workshops.clone(),
            all_past_workshops: Vec::new(),
            past_preview,
        }
    }

    pub fn past(title: &'a str, listing: &Listing<'a>) -> Self {
        Self {
            title,
            all_past_workshops: listing.past_workshops.clone(),
            ..Self::default()
        }
    }

    fn recent_past(&self) -> &[&'a Item] {
        let len = self.past_workshops.len().min(self.past_preview);
        &self.past_workshops[..len]
    }

    fn hidden_past_count(&self) -> usize {
        self.past_workshops.len().saturating_sub(self.past_preview)
    }
}

pub struct RenderedSite {
    pub index: String,
    pub past: String,
}

pub fn render_site(
    title: &str,
    listing: &Listing<'_>,
    past_preview: usize,
) -> Result<RenderedSite, SiteError> {
    let index = ListingPage::index(title, listing, past_preview)
        .render()
        .map_err(|source| SiteError::Render {
            page: "index",
            source,
        })?;
    let past = ListingPage::past(title, listing)
        .render()
        .map_err(|source| SiteError::Render {
            page: "past",
            source,
        })?;
    Ok(RenderedSite { index, past })
}
