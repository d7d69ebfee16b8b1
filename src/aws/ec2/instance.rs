use aws_sdk_ec2::types::{Filter, Instance};

use crate::query::Query;
use crate::{FindError, Result};

use super::super::client::AwsClients;

/// Standard Name tag
pub const AWS_NAME_TAG: &str = "Name";

/// EC2 filter that matches any tag value on an instance
const TAG_VALUE_FILTER: &str = "tag-value";

/// Find instances matching the query.
///
/// Issues a single DescribeInstances call and flattens the reservations
/// into one list, preserving the order the API returned. No pagination:
/// the provider's default page is accepted as-is.
pub async fn find_instances(clients: &AwsClients, query: &Query) -> Result<Vec<Instance>> {
    let request = match query {
        Query::Tag(substring) => clients.ec2.describe_instances().filters(
            Filter::builder()
                .name(TAG_VALUE_FILTER)
                .values(Query::tag_filter_value(substring))
                .build(),
        ),
        Query::Id(id) => clients.ec2.describe_instances().instance_ids(id),
    };

    let result = request.send().await.map_err(FindError::describe)?;

    let mut instances = Vec::new();
    for reservation in result.reservations() {
        instances.extend(reservation.instances().iter().cloned());
    }

    Ok(instances)
}

/// Get tag value from instance (first match wins)
pub fn get_tag_value(instance: &Instance, key: &str) -> Option<String> {
    instance
        .tags()
        .iter()
        .find(|t| t.key() == Some(key))
        .and_then(|t| t.value().map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::Tag;

    fn tag(key: &str, value: &str) -> Tag {
        Tag::builder().key(key).value(value).build()
    }

    #[test]
    fn test_get_tag_value_finds_first_match() {
        let instance = Instance::builder()
            .tags(tag("Role", "api"))
            .tags(tag(AWS_NAME_TAG, "web-1"))
            .tags(tag(AWS_NAME_TAG, "web-2"))
            .build();

        assert_eq!(
            get_tag_value(&instance, AWS_NAME_TAG),
            Some("web-1".to_string())
        );
    }

    #[test]
    fn test_get_tag_value_missing_key() {
        let instance = Instance::builder().tags(tag("Role", "api")).build();
        assert_eq!(get_tag_value(&instance, AWS_NAME_TAG), None);
    }

    #[test]
    fn test_get_tag_value_no_tags() {
        let instance = Instance::builder().build();
        assert_eq!(get_tag_value(&instance, AWS_NAME_TAG), None);
    }
}
