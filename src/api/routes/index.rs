//! Route index
//!
//! - GET / - plain-text listing of the available routes

/// GET /
///
/// Static plain-text route index.
pub async fn route_index() -> &'static str {
    "Welcome to the Climate API!\n\
     Available Routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/temp/{start}\n\
     /api/v1.0/temp/{start}/{end}\n"
}
