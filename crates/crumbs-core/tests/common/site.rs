//! Sample site written to a temp route table file for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

pub const ROUTES: &str = r#"
[[routes]]
name = "front"
path = "/node"
title = "Welcome"

[[routes]]
name = "node.view"
path = "/node/{nid}"
requirements = { nid = '^\d+$' }

[[routes]]
name = "blog.index"
path = "/blog"
title = "Blog"

[[routes]]
name = "blog.year"
path = "/blog/{year}"
title = "{year} Archive"
requirements = { year = '^\d{4}$' }

[[routes]]
name = "blog.post"
path = "/blog/{year}/{slug}"

[[routes]]
name = "user.page"
path = "/user/{uid}"
title = "Profile"

[[routes]]
name = "user.root"
path = "/user"
title = "Account"

[[routes]]
name = "admin.reports"
path = "/admin/reports"
title = "Reports"

[[routes]]
name = "admin"
path = "/admin"
access = "forbidden"

[[aliases]]
alias = "/about-us"
path = "/node/7"

[[aliases]]
alias = "/home"
path = "/node"
"#;

/// Writes [`ROUTES`] to a temp file that lives as long as the handle.
pub fn routes_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(ROUTES.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
