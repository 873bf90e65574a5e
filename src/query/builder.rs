//! Builds find queries (filter, sort, limit) for each catalog listing.

use bson::{doc, oid::ObjectId, Bson, Document};

pub const ALL_TOYS_LIMIT: i64 = 20;
pub const TOP_RATED_LIMIT: i64 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"ascending"` sorts ascending; any other value, or none, sorts descending.
    pub fn from_sort_type(sort_type: Option<&str>) -> Self {
        match sort_type {
            Some("ascending") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindQuery {
    pub filter: Document,
    pub sort: Option<(String, SortDirection)>,
    pub limit: Option<i64>,
}

impl FindQuery {
    /// Matches every document.
    pub fn all() -> Self {
        FindQuery::default()
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.filter.insert(field, value.into());
        self
    }

    pub fn sort_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sort specification in driver form, e.g. `{ "price": -1 }`.
    pub fn sort_document(&self) -> Option<Document> {
        self.sort.as_ref().map(|(field, dir)| {
            let mut d = Document::new();
            d.insert(field.as_str(), dir.as_i32());
            d
        })
    }
}

/// Filter selecting one document by `_id`.
pub fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Any 20 toys, in storage order.
pub fn all_toys() -> FindQuery {
    FindQuery::all().limit(ALL_TOYS_LIMIT)
}

/// Toys whose `subCategory` equals `category` exactly.
pub fn toys_in_category(category: &str) -> FindQuery {
    FindQuery::all().where_eq("subCategory", category)
}

/// Toys sorted by price, optionally restricted to one seller.
pub fn seller_toys(email: Option<&str>, direction: SortDirection) -> FindQuery {
    let q = match email {
        Some(email) => FindQuery::all().where_eq("sellerEmail", email),
        None => FindQuery::all(),
    };
    q.sort_by("price", direction)
}

pub fn top_rated() -> FindQuery {
    FindQuery::all()
        .sort_by("ratings", SortDirection::Descending)
        .limit(TOP_RATED_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_type_parsing() {
        assert_eq!(SortDirection::from_sort_type(Some("ascending")), SortDirection::Ascending);
        assert_eq!(SortDirection::from_sort_type(Some("Ascending")), SortDirection::Descending);
        assert_eq!(SortDirection::from_sort_type(Some("descending")), SortDirection::Descending);
        assert_eq!(SortDirection::from_sort_type(None), SortDirection::Descending);
    }

    #[test]
    fn seller_query_filters_and_sorts() {
        let q = seller_toys(Some("a@b.c"), SortDirection::Ascending);
        assert_eq!(q.filter, doc! { "sellerEmail": "a@b.c" });
        assert_eq!(q.sort_document(), Some(doc! { "price": 1 }));
        assert_eq!(q.limit, None);

        let q = seller_toys(None, SortDirection::Descending);
        assert!(q.filter.is_empty());
        assert_eq!(q.sort_document(), Some(doc! { "price": -1 }));
    }

    #[test]
    fn fixed_listings() {
        assert_eq!(all_toys().limit, Some(20));
        assert!(all_toys().sort.is_none());

        let q = top_rated();
        assert_eq!(q.limit, Some(6));
        assert_eq!(q.sort_document(), Some(doc! { "ratings": -1 }));

        assert_eq!(toys_in_category("Sports Car").filter, doc! { "subCategory": "Sports Car" });
    }
}
