//! Plain-text rendering of provider results

use super::models::{DescriptionsResponse, Poi, PostalAddress, WebResult};

const NOT_AVAILABLE: &str = "N/A";

/// One `Title/Description/URL` block per result, in provider order, separated by blank lines
pub fn render_web_results(query: &str, results: &[WebResult]) -> String {
    if results.is_empty() {
        return format!("No web results found for \"{}\"", query);
    }

    results
        .iter()
        .map(|r| {
            format!(
                "Title: {}\nDescription: {}\nURL: {}",
                r.title.as_deref().unwrap_or_default(),
                r.description.as_deref().unwrap_or_default(),
                r.url.as_deref().unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One block per place; every label is always present, missing values read `N/A`
pub fn render_local_results(query: &str, pois: &[Poi], descriptions: &DescriptionsResponse) -> String {
    if pois.is_empty() {
        return format!("No local results found for \"{}\"", query);
    }

    pois.iter()
        .map(|poi| render_poi(poi, descriptions))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn render_poi(poi: &Poi, descriptions: &DescriptionsResponse) -> String {
    let address = poi.address.as_ref().map(format_address).unwrap_or_default();
    let category = join_or_na(poi.categories.as_deref());
    let hours = join_or_na(poi.opening_hours.as_deref());
    let rating = poi
        .rating
        .as_ref()
        .and_then(|r| r.rating_value)
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let reviews = poi.rating.as_ref().and_then(|r| r.rating_count).unwrap_or(0);
    let description = poi
        .id
        .as_deref()
        .and_then(|id| descriptions.get(id))
        .unwrap_or("No description available");

    format!(
        "Name: {}\nAddress: {}\nCategory: {}\nPhone: {}\nRating: {} ({} reviews)\nPrice Range: {}\nHours: {}\nDescription: {}",
        or_na(poi.name.as_deref()),
        or_na(Some(address.as_str())),
        category,
        or_na(poi.phone.as_deref()),
        rating,
        reviews,
        or_na(poi.price_range.as_deref()),
        hours,
        description,
    )
}

fn format_address(address: &PostalAddress) -> String {
    [
        &address.street_address,
        &address.address_locality,
        &address.address_region,
        &address.postal_code,
    ]
    .iter()
    .filter_map(|part| part.as_deref())
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

fn join_or_na(values: Option<&[String]>) -> String {
    let joined = values
        .unwrap_or_default()
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brave::models::Rating;
    use std::collections::HashMap;

    fn web(title: &str, url: &str, description: &str) -> WebResult {
        WebResult {
            title: Some(title.into()),
            url: Some(url.into()),
            description: Some(description.into()),
        }
    }

    #[test]
    fn web_results_render_in_order() {
        let text = render_web_results(
            "rust",
            &[
                web("Rust", "https://rust-lang.org", "A language"),
                web("Crates", "https://crates.io", "Registry"),
            ],
        );
        assert_eq!(
            text,
            "Title: Rust\nDescription: A language\nURL: https://rust-lang.org\n\n\
             Title: Crates\nDescription: Registry\nURL: https://crates.io"
        );
    }

    #[test]
    fn empty_web_results_are_described() {
        assert_eq!(render_web_results("zzz", &[]), "No web results found for \"zzz\"");
    }

    #[test]
    fn missing_web_fields_render_empty() {
        let text = render_web_results("q", &[WebResult::default()]);
        assert_eq!(text, "Title: \nDescription: \nURL: ");
    }

    #[test]
    fn poi_with_missing_fields_keeps_every_label() {
        let text = render_local_results(
            "pizza",
            &[Poi { name: Some("Luigi's".into()), ..Default::default() }],
            &DescriptionsResponse::default(),
        );
        assert_eq!(
            text,
            "Name: Luigi's\nAddress: N/A\nCategory: N/A\nPhone: N/A\nRating: N/A (0 reviews)\n\
             Price Range: N/A\nHours: N/A\nDescription: No description available"
        );
    }

    #[test]
    fn full_poi_renders_all_values() {
        let poi = Poi {
            id: Some("p1".into()),
            name: Some("Cafe Uno".into()),
            address: Some(PostalAddress {
                street_address: Some("1 Main St".into()),
                address_locality: Some("Springfield".into()),
                address_region: Some("".into()),
                postal_code: Some("12345".into()),
            }),
            categories: Some(vec!["Cafe".into(), "Bakery".into()]),
            phone: Some("+1 555 0100".into()),
            rating: Some(Rating { rating_value: Some(4.5), rating_count: Some(87) }),
            price_range: Some("$$".into()),
            opening_hours: Some(vec!["Mon-Fri 8-18".into(), "Sat 9-14".into()]),
        };
        let descriptions = DescriptionsResponse {
            descriptions: HashMap::from([("p1".to_string(), Some("Cozy spot".to_string()))]),
        };

        let text = render_local_results("cafe", &[poi.clone(), poi], &descriptions);
        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            "Name: Cafe Uno\nAddress: 1 Main St, Springfield, 12345\nCategory: Cafe, Bakery\n\
             Phone: +1 555 0100\nRating: 4.5 (87 reviews)\nPrice Range: $$\n\
             Hours: Mon-Fri 8-18, Sat 9-14\nDescription: Cozy spot"
        );
    }

    #[test]
    fn empty_places_are_described() {
        let text = render_local_results("nowhere", &[], &DescriptionsResponse::default());
        assert_eq!(text, "No local results found for \"nowhere\"");
    }
}
