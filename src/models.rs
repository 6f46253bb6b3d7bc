use serde::Deserialize;

/// Fields required to create a movie record. Rating, review and ranking are
/// absent at creation and filled in later by the edit handler and the
/// ranking recalculation.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}
