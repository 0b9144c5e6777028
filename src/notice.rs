use crate::types::ExternalEntry;

/// Informational notice shown instead of following an external link
#[derive(Clone, Debug, PartialEq)]
pub struct ComingSoonNotice {
    pub title: String,
    pub message: String,
}

pub fn coming_soon(entry: &ExternalEntry) -> ComingSoonNotice {
    ComingSoonNotice {
        title: entry.title.clone(),
        message: format!("The {} page will be available soon!", entry.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_names_the_link() {
        let entry = ExternalEntry {
            id: "blog".to_string(),
            title: "Blog".to_string(),
            icon: "bi-rss".to_string(),
            url: "#".to_string(),
        };
        let notice = coming_soon(&entry);
        assert_eq!(notice.title, "Blog");
        assert_eq!(notice.message, "The Blog page will be available soon!");
    }
}
