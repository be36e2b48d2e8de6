mod detail;
mod list;

pub use detail::CaseStudyDetail;
pub use list::CaseStudyList;
