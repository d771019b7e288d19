pub(crate) mod breadcrumbs;
pub(crate) mod view;
