use super::*;
use crate::constants::header;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_store_once_given_header_is_regular() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(Header::new(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace"));

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace".to_string())
        );
    }

    #[test]
    fn should_skip_header_given_value_is_empty() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(Header::new(header::ACCESS_CONTROL_ALLOW_HEADERS, ""));

        // Assert
        assert!(collection.into_headers().is_empty());
    }

    #[test]
    fn should_use_deduplicated_value_given_header_is_vary() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(Header::new(header::VARY, "Origin"));
        collection.push(Header::new("vary", "origin"));

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
    }

    #[test]
    fn should_keep_insertion_order_given_several_headers() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
        collection.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, "GET"));
        collection.push(Header::new(header::ACCESS_CONTROL_MAX_AGE, "10"));

        // Assert
        let names: Vec<_> = collection.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::ACCESS_CONTROL_ALLOW_METHODS,
                header::ACCESS_CONTROL_MAX_AGE,
            ]
        );
    }
}

mod add_vary {
    use super::*;

    #[test]
    fn should_store_unique_entries_given_values_have_mixed_case() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("Origin");
        collection.add_vary("Access-Control-Request-Headers");
        collection.add_vary("origin");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::VARY),
            Some(&"Origin, Access-Control-Request-Headers".to_string())
        );
    }

    #[test]
    fn should_not_create_vary_header_given_value_is_whitespace() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("   ");

        // Assert
        assert!(!collection.into_headers().contains_key(header::VARY));
    }
}

mod extend {
    use super::*;

    #[test]
    fn should_combine_and_deduplicate_given_merging_collections() {
        // Arrange
        let mut base = HeaderCollection::new();
        base.push(Header::new(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"));
        base.add_vary("Origin");
        let mut other = HeaderCollection::new();
        other.push(Header::new(header::VARY, "origin"));
        other.push(Header::new(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace"));

        // Act
        base.extend(other);

        // Assert
        let headers = base.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&"true".to_string())
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace".to_string())
        );
    }
}
