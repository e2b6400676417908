//! Fixtures shared by the benchmarks.

/// A fixture file embedded with `include_str!`.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// A named benchmark input.
///
/// `listed` holds the query parameters the scalar-first decoder keeps as lists;
/// header benchmarks leave it empty.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
    listed: &'static [&'static str],
}

impl TestCase {
    pub fn headers(name: &'static str, file: TestFile) -> Self {
        Self { name, file, listed: &[] }
    }

    pub fn query(name: &'static str, file: TestFile, listed: &'static [&'static str]) -> Self {
        Self { name, file, listed }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn listed(&self) -> &'static [&'static str] {
        self.listed
    }
}
