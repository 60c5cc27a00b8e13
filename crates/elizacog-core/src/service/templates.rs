//! Fixed template assets and the writer that lays them down.
//!
//! The bridge stubs are placeholder Python modules: they are data, not logic,
//! and their content never depends on the configuration. Only their location
//! does (`paths.bridges_dir`).

use std::path::{Path, PathBuf};

use elizacog_types::character::{CHARACTER_TEMPLATE_FILE, CharacterProfile};
use elizacog_types::error::BridgeError;

use crate::service::fs::FileSystem;

/// One placeholder module written into the bridges directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeTemplate {
    pub file_name: &'static str,
    pub content: &'static str,
}

/// Every file written into the bridges directory, orchestrator last.
pub const BRIDGE_TEMPLATES: [BridgeTemplate; 4] = [
    BridgeTemplate {
        file_name: "knowledge_bridge.py",
        content: KNOWLEDGE_BRIDGE,
    },
    BridgeTemplate {
        file_name: "memory_bridge.py",
        content: MEMORY_BRIDGE,
    },
    BridgeTemplate {
        file_name: "reasoning_bridge.py",
        content: REASONING_BRIDGE,
    },
    BridgeTemplate {
        file_name: "__init__.py",
        content: BRIDGES_PACKAGE,
    },
];

/// File names `test_integration` requires in the bridges directory.
pub fn required_bridge_files() -> impl Iterator<Item = &'static str> {
    BRIDGE_TEMPLATES.iter().map(|t| t.file_name)
}

const KNOWLEDGE_BRIDGE: &str = r##""""
Knowledge Bridge - OpenCog AtomSpace to ElizaOS Knowledge Transfer

Handles bidirectional knowledge transfer between OpenCog and ElizaOS.
"""

class KnowledgeBridge:
    """Bridges knowledge between OpenCog AtomSpace and ElizaOS."""

    def __init__(self, config):
        self.config = config
        self.atomspace = None
        self.eliza_client = None

    def initialize(self):
        """Initialize the knowledge bridge."""
        print("🧠 Initializing Knowledge Bridge...")
        self._init_atomspace()
        self._init_eliza_connection()

    def _init_atomspace(self):
        """Initialize OpenCog AtomSpace."""
        try:
            from opencog.atomspace import AtomSpace
            self.atomspace = AtomSpace()
            print("   ✅ AtomSpace connected")
        except ImportError:
            print("   ⚠️  AtomSpace not available - using mock")
            self.atomspace = MockAtomSpace()

    def _init_eliza_connection(self):
        """Initialize ElizaOS connection."""
        print("   🔗 ElizaOS connection initialized (placeholder)")
        self.eliza_client = MockElizaClient()

    def sync_knowledge(self):
        """Synchronize knowledge between systems."""
        print("🔄 Syncing knowledge between OpenCog and ElizaOS...")

        if self.config.get('integration.data_flow.opencog_to_eliza'):
            self._transfer_to_eliza()

        if self.config.get('integration.data_flow.eliza_to_opencog'):
            self._transfer_to_opencog()

    def _transfer_to_eliza(self):
        """Transfer knowledge from OpenCog to ElizaOS."""
        print("   📤 Transferring knowledge to ElizaOS...")

    def _transfer_to_opencog(self):
        """Transfer knowledge from ElizaOS to OpenCog."""
        print("   📥 Transferring knowledge to OpenCog...")


class MockAtomSpace:
    """Mock AtomSpace for testing without OpenCog."""
    def __init__(self):
        self.atoms = []

    def add_node(self, type_name, name):
        return f"MockNode({type_name}, {name})"


class MockElizaClient:
    """Mock ElizaOS client for testing."""
    def __init__(self):
        self.connected = True

    def get_knowledge(self):
        return {"mock": "knowledge"}
"##;

const MEMORY_BRIDGE: &str = r##""""
Memory Bridge - OpenCog to ElizaOS Memory Synchronization

Handles memory sharing and synchronization between systems.
"""

from datetime import datetime


class MemoryBridge:
    """Bridges memory between OpenCog and ElizaOS."""

    def __init__(self, config):
        self.config = config
        self.memory_store = {}

    def initialize(self):
        """Initialize the memory bridge."""
        print("🧩 Initializing Memory Bridge...")

    def sync_memories(self):
        """Synchronize memories between systems."""
        print("🔄 Syncing memories...")

    def store_interaction(self, interaction_data):
        """Store interaction data for both systems."""
        timestamp = str(datetime.now())
        self.memory_store[timestamp] = interaction_data
        print(f"   💾 Stored interaction: {timestamp}")
"##;

const REASONING_BRIDGE: &str = r##""""
Reasoning Bridge - OpenCog to ElizaOS Reasoning Integration

Enables shared reasoning capabilities between systems.
"""

class ReasoningBridge:
    """Bridges reasoning between OpenCog and ElizaOS."""

    def __init__(self, config):
        self.config = config
        self.reasoning_engine = None

    def initialize(self):
        """Initialize the reasoning bridge."""
        print("⚡ Initializing Reasoning Bridge...")

    def process_query(self, query):
        """Process reasoning query across both systems."""
        print(f"🤔 Processing query: {query}")
        return {"result": "processed", "confidence": 0.85}

    def share_inferences(self):
        """Share inferences between systems."""
        print("🔗 Sharing inferences...")
"##;

const BRIDGES_PACKAGE: &str = r##""""
ElizaCog Bridges - Main Integration Module

Orchestrates all bridge modules for OpenCog-ElizaOS integration.
"""

from .knowledge_bridge import KnowledgeBridge
from .memory_bridge import MemoryBridge
from .reasoning_bridge import ReasoningBridge


class ElizaCogBridgeOrchestrator:
    """Main orchestrator for all ElizaCog bridges."""

    def __init__(self, config):
        self.config = config
        self.knowledge_bridge = KnowledgeBridge(config)
        self.memory_bridge = MemoryBridge(config)
        self.reasoning_bridge = ReasoningBridge(config)

    def initialize_all(self):
        """Initialize all bridge modules."""
        print("🌉 Initializing ElizaCog Bridge Orchestrator...")

        self.knowledge_bridge.initialize()
        self.memory_bridge.initialize()
        self.reasoning_bridge.initialize()

        print("✅ All bridges initialized successfully!")

    def sync_all(self):
        """Run full synchronization across all bridges."""
        print("🔄 Running full bridge synchronization...")

        self.knowledge_bridge.sync_knowledge()
        self.memory_bridge.sync_memories()
        self.reasoning_bridge.share_inferences()

        print("✅ Full synchronization complete!")


__all__ = ['ElizaCogBridgeOrchestrator', 'KnowledgeBridge', 'MemoryBridge', 'ReasoningBridge']
"##;

/// Render the stock character profile as 2-space indented JSON.
pub fn render_character_template() -> Result<String, BridgeError> {
    serde_json::to_string_pretty(&CharacterProfile::elizacog())
        .map_err(|e| BridgeError::Serialize(e.to_string()))
}

/// Writes the fixed assets through a [`FileSystem`].
///
/// Every write creates parent directories and overwrites existing files, so
/// running it twice leaves identical content on disk.
pub struct TemplateWriter<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> TemplateWriter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Write the three bridge stubs and the package orchestrator.
    pub fn write_bridge_modules(&self, bridges_dir: &Path) -> Result<Vec<PathBuf>, BridgeError> {
        let mut written = Vec::with_capacity(BRIDGE_TEMPLATES.len());
        for template in BRIDGE_TEMPLATES {
            let path = bridges_dir.join(template.file_name);
            self.write(&path, template.content)?;
            tracing::info!(path = %path.display(), "Wrote bridge module");
            written.push(path);
        }
        Ok(written)
    }

    /// Write `eliza_character_template.json` into `base_dir`.
    pub fn write_character_template(&self, base_dir: &Path) -> Result<PathBuf, BridgeError> {
        let path = base_dir.join(CHARACTER_TEMPLATE_FILE);
        let content = render_character_template()?;
        self.write(&path, &content)?;
        tracing::info!(path = %path.display(), "Wrote character template");
        Ok(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), BridgeError> {
        self.fs
            .write_file(path, content)
            .map_err(|source| BridgeError::FileSystem {
                path: path.to_path_buf(),
                source,
            })
    }
}
