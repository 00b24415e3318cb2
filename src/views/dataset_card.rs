use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::actions::ActionRequest;
use crate::api::models::DatasetOut;
use crate::state::RootState;
use crate::views::{Container, ViewContext};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetCardProps {
    pub id: String,
    pub name: String,
    pub author: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub thumbnail_id: Option<String>,
}

impl From<&DatasetOut> for DatasetCardProps {
    fn from(dataset: &DatasetOut) -> Self {
        Self {
            id: dataset.id.clone(),
            name: dataset.name.clone(),
            author: dataset.author_name(),
            created: dataset.created,
            description: dataset.description.clone(),
            thumbnail_id: dataset.thumbnail_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetCardView {
    pub title: String,
    pub subheader: String,
    /// Empty when the dataset has no thumbnail.
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    pub author: String,
    pub description: String,
    pub link: String,
    pub download_url: String,
}

/// Card summarising one dataset in a listing.
pub struct DatasetCard;

impl DatasetCard {
    /// One card per dataset in the current listing.
    pub fn render_listing(state: &RootState, ctx: &ViewContext) -> Vec<DatasetCardView> {
        state
            .dataset
            .datasets
            .iter()
            .map(|dataset| Self::render(state, &DatasetCardProps::from(dataset), ctx))
            .collect()
    }
}

impl Container for DatasetCard {
    type Props = DatasetCardProps;
    type ViewModel = DatasetCardView;

    /// Cards render from props handed down by the listing.
    fn on_mount(_: &DatasetCardProps) -> Vec<ActionRequest> {
        Vec::new()
    }

    fn render(_: &RootState, props: &DatasetCardProps, ctx: &ViewContext) -> DatasetCardView {
        let thumbnail_url = props
            .thumbnail_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| ctx.v2_url(&format!("/thumbnails/{}/download", id)))
            .unwrap_or_default();

        DatasetCardView {
            title: props.name.clone(),
            subheader: format_created(props.created),
            thumbnail_url,
            thumbnail_alt: format!("{}_thumbnail", props.name),
            author: props.author.clone().unwrap_or_default(),
            description: props.description.clone().unwrap_or_default(),
            link: format!("/datasets/{}", props.id),
            download_url: ctx.v2_url(&format!("/datasets/{}/download", props.id)),
        }
    }
}

/// Creation date as shown on cards, e.g. "Mar 01 2022 12:30".
pub fn format_created(created: Option<DateTime<Utc>>) -> String {
    created
        .map(|created| created.format("%b %d %Y %H:%M").to_string())
        .unwrap_or_default()
}
