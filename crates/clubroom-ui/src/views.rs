//! View registry backing the navigator.
//!
//! # Design
//! - Only the landing view ships with the entry point; every other view is
//!   handed out through the asynchronous path.
//! - A handle carries the headline the view reports once mounted, which feeds
//!   titled breadcrumb trails.

use async_trait::async_trait;
use clubroom_routes::{PostKind, ViewKind, ViewLoadError, ViewLoader, ViewProps};

const BUNDLED: &[ViewKind] = &[ViewKind::HomeView];

/// Loaded view ready to mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewHandle {
    /// Component kind.
    pub kind: ViewKind,
}

impl ViewHandle {
    /// Headline the mounted view reports for the given props.
    #[must_use]
    pub fn title(self, props: Option<&ViewProps>) -> String {
        match props {
            Some(ViewProps::Post { kind }) => post_label(*kind).to_string(),
            Some(ViewProps::Entry { kind, no }) => format!("{} #{no}", post_label(*kind)),
            Some(ViewProps::Class { name }) => name.clone(),
            Some(ViewProps::ClassRecord { name, conducted }) => format!("{name} · {conducted}"),
            None => view_label(self.kind).to_string(),
        }
    }
}

/// Registry of the site's views.
#[derive(Clone, Copy, Debug)]
pub struct ViewRegistry {
    bundled: &'static [ViewKind],
}

impl ViewRegistry {
    /// Registry with the landing view bundled.
    #[must_use]
    pub const fn new() -> Self {
        Self { bundled: BUNDLED }
    }

    /// Whether `kind` ships with the entry point.
    #[must_use]
    pub fn is_bundled(&self, kind: ViewKind) -> bool {
        self.bundled.contains(&kind)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ViewLoader for ViewRegistry {
    type View = ViewHandle;

    fn eager(&self, kind: ViewKind) -> Result<ViewHandle, ViewLoadError> {
        if self.is_bundled(kind) {
            Ok(ViewHandle { kind })
        } else {
            Err(ViewLoadError::Unavailable { view: kind })
        }
    }

    async fn load(&self, kind: ViewKind) -> Result<ViewHandle, ViewLoadError> {
        Ok(ViewHandle { kind })
    }
}

const fn post_label(kind: PostKind) -> &'static str {
    match kind {
        PostKind::About => "소개",
        PostKind::Rules => "회칙",
        PostKind::Notices => "공지",
    }
}

const fn view_label(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::HomeView => "대문",
        ViewKind::PostView => "글",
        ViewKind::PostListView => "글 목록",
        ViewKind::PostWriteView => "글쓰기",
        ViewKind::MeView => "내 정보",
        ViewKind::MagazineGridView => "문집",
        ViewKind::MagazineWriteView => "문집 쓰기",
        ViewKind::ClassView => "수업",
        ViewKind::ClassRecordView => "수업 기록",
        ViewKind::ClassRecordWriteView => "수업 기록 쓰기",
        ViewKind::AdminView => "관리",
        ViewKind::AdminClubInformationView => "동아리 정보",
        ViewKind::AdminClassInformationView => "수업 정보",
        ViewKind::AdminMemberList => "회원 목록",
    }
}
