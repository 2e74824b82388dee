use super::*;

#[test]
fn raw_values_map_back_to_their_tag() {
	for raw in [0, 4, 26, 29, 30, 33, 1_000_085_000, 1_000_156_000, 1_000_165_000] {
		assert_eq!(ObjectType::from_raw(raw).raw(), raw);
		assert!(!matches!(ObjectType::from_raw(raw), ObjectType::Other(_)));
	}
}

#[test]
fn unmapped_value_is_preserved() {
	let tag = ObjectType::from(31);
	assert_eq!(tag, ObjectType::Other(31));
	assert_eq!(tag.raw(), 31);
	assert_eq!(tag.core_raw(), 0);
	assert_eq!(tag.to_string(), "Unknown");
}

#[test]
fn core_values_follow_extension_ranges() {
	assert_eq!(ObjectType::Queue.core_raw(), 4);
	assert_eq!(ObjectType::Surface.core_raw(), 1_000_000_000);
	assert_eq!(ObjectType::Swapchain.core_raw(), 1_000_001_000);
	assert_eq!(ObjectType::DebugReportCallback.core_raw(), 1_000_011_000);
	assert_eq!(ObjectType::Display.core_raw(), 1_000_002_000);
	assert_eq!(ObjectType::ValidationCache.core_raw(), 1_000_160_000);
	assert_eq!(ObjectType::SamplerYcbcrConversion.core_raw(), 1_000_156_000);
}

#[test]
fn type_names() {
	assert_eq!(ObjectType::Swapchain.to_string(), "VkSwapchainKHR");
	assert_eq!(ObjectType::DescriptorUpdateTemplate.to_string(), "VkDescriptorUpdateTemplate");
}
