mod detail;
mod list;

pub use detail::StudentDetail;
pub use list::StudentList;
