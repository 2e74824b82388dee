//! Object type tags and the named-object record handed to utils-scheme sinks.
//!
//! Validation code tags handles with legacy report object types. Utils-scheme
//! sinks see the core object type instead, so every known tag carries both
//! values. Tags with no known mapping survive as [`ObjectType::Other`].

use std::fmt;

/// Type tag for an opaque API object handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
	#[default]
	Unknown,
	Instance,
	PhysicalDevice,
	Device,
	Queue,
	Semaphore,
	CommandBuffer,
	Fence,
	DeviceMemory,
	Buffer,
	Image,
	Event,
	QueryPool,
	BufferView,
	ImageView,
	ShaderModule,
	PipelineCache,
	PipelineLayout,
	RenderPass,
	Pipeline,
	DescriptorSetLayout,
	Sampler,
	DescriptorPool,
	DescriptorSet,
	Framebuffer,
	CommandPool,
	Surface,
	Swapchain,
	DebugReportCallback,
	Display,
	DisplayMode,
	ValidationCache,
	DescriptorUpdateTemplate,
	SamplerYcbcrConversion,
	AccelerationStructure,
	/// A legacy object type value this crate has no name for.
	Other(u32),
}

impl ObjectType {
	/// Maps a raw legacy object type value to its tag.
	pub const fn from_raw(raw: u32) -> Self {
		match raw {
			0 => Self::Unknown,
			1 => Self::Instance,
			2 => Self::PhysicalDevice,
			3 => Self::Device,
			4 => Self::Queue,
			5 => Self::Semaphore,
			6 => Self::CommandBuffer,
			7 => Self::Fence,
			8 => Self::DeviceMemory,
			9 => Self::Buffer,
			10 => Self::Image,
			11 => Self::Event,
			12 => Self::QueryPool,
			13 => Self::BufferView,
			14 => Self::ImageView,
			15 => Self::ShaderModule,
			16 => Self::PipelineCache,
			17 => Self::PipelineLayout,
			18 => Self::RenderPass,
			19 => Self::Pipeline,
			20 => Self::DescriptorSetLayout,
			21 => Self::Sampler,
			22 => Self::DescriptorPool,
			23 => Self::DescriptorSet,
			24 => Self::Framebuffer,
			25 => Self::CommandPool,
			26 => Self::Surface,
			27 => Self::Swapchain,
			28 => Self::DebugReportCallback,
			29 => Self::Display,
			30 => Self::DisplayMode,
			33 => Self::ValidationCache,
			1_000_085_000 => Self::DescriptorUpdateTemplate,
			1_000_156_000 => Self::SamplerYcbcrConversion,
			1_000_165_000 => Self::AccelerationStructure,
			other => Self::Other(other),
		}
	}

	/// Returns the raw legacy object type value.
	pub const fn raw(self) -> u32 {
		match self {
			Self::Unknown => 0,
			Self::Instance => 1,
			Self::PhysicalDevice => 2,
			Self::Device => 3,
			Self::Queue => 4,
			Self::Semaphore => 5,
			Self::CommandBuffer => 6,
			Self::Fence => 7,
			Self::DeviceMemory => 8,
			Self::Buffer => 9,
			Self::Image => 10,
			Self::Event => 11,
			Self::QueryPool => 12,
			Self::BufferView => 13,
			Self::ImageView => 14,
			Self::ShaderModule => 15,
			Self::PipelineCache => 16,
			Self::PipelineLayout => 17,
			Self::RenderPass => 18,
			Self::Pipeline => 19,
			Self::DescriptorSetLayout => 20,
			Self::Sampler => 21,
			Self::DescriptorPool => 22,
			Self::DescriptorSet => 23,
			Self::Framebuffer => 24,
			Self::CommandPool => 25,
			Self::Surface => 26,
			Self::Swapchain => 27,
			Self::DebugReportCallback => 28,
			Self::Display => 29,
			Self::DisplayMode => 30,
			Self::ValidationCache => 33,
			Self::DescriptorUpdateTemplate => 1_000_085_000,
			Self::SamplerYcbcrConversion => 1_000_156_000,
			Self::AccelerationStructure => 1_000_165_000,
			Self::Other(raw) => raw,
		}
	}

	/// Returns the core object type value. Unmapped tags yield zero.
	pub const fn core_raw(self) -> u32 {
		match self {
			Self::Unknown => 0,
			Self::Instance => 1,
			Self::PhysicalDevice => 2,
			Self::Device => 3,
			Self::Queue => 4,
			Self::Semaphore => 5,
			Self::CommandBuffer => 6,
			Self::Fence => 7,
			Self::DeviceMemory => 8,
			Self::Buffer => 9,
			Self::Image => 10,
			Self::Event => 11,
			Self::QueryPool => 12,
			Self::BufferView => 13,
			Self::ImageView => 14,
			Self::ShaderModule => 15,
			Self::PipelineCache => 16,
			Self::PipelineLayout => 17,
			Self::RenderPass => 18,
			Self::Pipeline => 19,
			Self::DescriptorSetLayout => 20,
			Self::Sampler => 21,
			Self::DescriptorPool => 22,
			Self::DescriptorSet => 23,
			Self::Framebuffer => 24,
			Self::CommandPool => 25,
			Self::Surface => 1_000_000_000,
			Self::Swapchain => 1_000_001_000,
			Self::DebugReportCallback => 1_000_011_000,
			Self::Display => 1_000_002_000,
			Self::DisplayMode => 1_000_002_001,
			Self::ValidationCache => 1_000_160_000,
			Self::DescriptorUpdateTemplate => 1_000_085_000,
			Self::SamplerYcbcrConversion => 1_000_156_000,
			Self::AccelerationStructure => 1_000_165_000,
			Self::Other(_) => 0,
		}
	}

	/// Returns the API type name used when rendering handles.
	pub const fn type_name(self) -> &'static str {
		match self {
			Self::Unknown => "Unknown",
			Self::Instance => "VkInstance",
			Self::PhysicalDevice => "VkPhysicalDevice",
			Self::Device => "VkDevice",
			Self::Queue => "VkQueue",
			Self::Semaphore => "VkSemaphore",
			Self::CommandBuffer => "VkCommandBuffer",
			Self::Fence => "VkFence",
			Self::DeviceMemory => "VkDeviceMemory",
			Self::Buffer => "VkBuffer",
			Self::Image => "VkImage",
			Self::Event => "VkEvent",
			Self::QueryPool => "VkQueryPool",
			Self::BufferView => "VkBufferView",
			Self::ImageView => "VkImageView",
			Self::ShaderModule => "VkShaderModule",
			Self::PipelineCache => "VkPipelineCache",
			Self::PipelineLayout => "VkPipelineLayout",
			Self::RenderPass => "VkRenderPass",
			Self::Pipeline => "VkPipeline",
			Self::DescriptorSetLayout => "VkDescriptorSetLayout",
			Self::Sampler => "VkSampler",
			Self::DescriptorPool => "VkDescriptorPool",
			Self::DescriptorSet => "VkDescriptorSet",
			Self::Framebuffer => "VkFramebuffer",
			Self::CommandPool => "VkCommandPool",
			Self::Surface => "VkSurfaceKHR",
			Self::Swapchain => "VkSwapchainKHR",
			Self::DebugReportCallback => "VkDebugReportCallbackEXT",
			Self::Display => "VkDisplayKHR",
			Self::DisplayMode => "VkDisplayModeKHR",
			Self::ValidationCache => "VkValidationCacheEXT",
			Self::DescriptorUpdateTemplate => "VkDescriptorUpdateTemplate",
			Self::SamplerYcbcrConversion => "VkSamplerYcbcrConversion",
			Self::AccelerationStructure => "VkAccelerationStructureNV",
			Self::Other(_) => "Unknown",
		}
	}
}

impl From<u32> for ObjectType {
	fn from(raw: u32) -> Self {
		Self::from_raw(raw)
	}
}

impl fmt::Display for ObjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.type_name())
	}
}

/// One object referenced by a diagnostic, with its resolved display name.
///
/// Sinks reading the numeric type should use [`ObjectType::core_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectNameInfo {
	pub object_type: ObjectType,
	pub handle: u64,
	/// `None` when no name is registered or the handle is null.
	pub name: Option<String>,
}

#[cfg(test)]
mod tests;
