//! The AYO pitch deck.

use std::time::Duration;

use super::{DeckError, SlideContent, SlideDescriptor, SlideRegistry, Step};

/// Dwell time on the overview diagrams before moving on by themselves.
pub const DIAGRAM_DWELL: Duration = Duration::from_millis(5000);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bullets(section: &str, heading: &str, items: &[&str]) -> SlideContent {
    SlideContent::Bullets {
        section: section.to_string(),
        heading: heading.to_string(),
        items: strings(items),
    }
}

fn diagram(section: &str, heading: &str, caption: &str, nodes: &[&str]) -> SlideContent {
    SlideContent::Diagram {
        section: section.to_string(),
        heading: heading.to_string(),
        caption: caption.to_string(),
        nodes: strings(nodes),
    }
}

fn walkthrough(section: &str, heading: &str, nodes: &[&str], steps: Vec<Step>) -> SlideContent {
    SlideContent::Walkthrough {
        section: section.to_string(),
        heading: heading.to_string(),
        nodes: strings(nodes),
        steps,
    }
}

pub fn deck() -> Result<SlideRegistry, DeckError> {
    SlideRegistry::new(vec![
        SlideDescriptor::normal(
            "title",
            SlideContent::Title {
                title: "AYO".to_string(),
                subtitle: "The Privacy-First AI Desktop Assistant".to_string(),
                tagline: "Think, Decide, Act - Securely.".to_string(),
            },
        ),
        SlideDescriptor::normal(
            "problems",
            bullets(
                "01 · The Problem",
                "Everyday friction",
                &[
                    "Developers debugging code by manually searching online",
                    "Designers juggling multiple applications",
                    "Users struggling with complex Excel formulas",
                    "Students summarizing multiple PDFs by hand",
                    "Bored users looking for suggestions",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "solution",
            bullets(
                "02 · The Solution",
                "AYO steps in",
                &[
                    "Debugs code instantly",
                    "Suggests design tools and workflows",
                    "Generates Excel formulas on demand",
                    "Summarizes documents automatically",
                    "Recommends activities based on context",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "problem-statement",
            bullets(
                "03 · Problem Statement",
                "Powerful, but not intelligent",
                &[
                    "Computers are powerful tools, but they lack intelligence",
                    "Navigating systems requires manual effort",
                    "Existing assistants are reactive tools, not companions",
                    "We need a unified system that combines intelligence with control",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "key-features",
            bullets(
                "04 · Key Features",
                "What makes AYO different",
                &[
                    "Context aware: understands active apps and interaction patterns",
                    "Multimodal: voice, text and hotkeys",
                    "Deterministic policy engine validates AI actions before execution",
                    "Privacy first: local processing, privacy mode, full data control",
                    "Self-hosted LLM for data sovereignty",
                    "Emotional awareness, optional and local",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "related-work",
            bullets(
                "05 · Related Work",
                "Where others stop",
                &[
                    "Microsoft Copilot: chat-focused, limited real-time awareness",
                    "Voice assistants: command-based, not reasoning-based",
                    "Automation tools: rule-based, not adaptive",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "gap-analysis",
            bullets(
                "06 · Gap Analysis",
                "What current assistants lack",
                &[
                    "Deep context understanding",
                    "Proactive behavior",
                    "Local processing instead of cloud reliance",
                    "AYO fills the gap with context awareness, structured reasoning and privacy by design",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "privacy",
            bullets(
                "07 · Privacy & Security",
                "Privacy by design",
                &[
                    "All sensitive processing is local, no raw data transmission",
                    "Global privacy mode instantly disables sensors and context collection",
                    "Policy engine validates every suggestion against permissions and risk",
                    "HTTPS, controlled API endpoints, no direct OS access from the server",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "ai-integration",
            bullets(
                "08 · AI Integration",
                "LLM suggests, policy decides",
                &[
                    "Natural understanding and reasoning beyond rule-based systems",
                    "User → Client → Policy Engine → LLM Server → Structured Response → Validation → Execution",
                    "High-impact actions require user approval",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "methodology",
            bullets(
                "09 · Methodology",
                "Agile development",
                &[
                    "Voice interaction",
                    "Context awareness",
                    "Emotion detection",
                    "System orchestration",
                    "Continuous testing and feedback between iterations",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "feasibility",
            bullets(
                "10 · Feasibility",
                "Can it be built?",
                &[
                    "Technical: achievable with a desktop client, Python services and local LLMs",
                    "Operational: integrates naturally into existing workflows",
                    "Economic: open source and local hosting keep API costs low",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "architecture",
            diagram(
                "11 · Architecture",
                "Layered client-server hybrid",
                "The client owns every OS action; the remote server only reasons.",
                &[
                    "User",
                    "Client UI",
                    "Orchestrator",
                    "Policy Engine",
                    "Emotion Engine",
                    "LLM Server",
                ],
            ),
        ),
        SlideDescriptor::normal(
            "subsystem",
            diagram(
                "12 · Subsystems",
                "Cooperating subsystems",
                "The orchestrator is the decision hub between capture, policy and execution.",
                &[
                    "Voice I/O",
                    "Context Capture",
                    "Orchestrator",
                    "Policy Engine",
                    "Tool Executor",
                    "Local Storage",
                ],
            ),
        ),
        SlideDescriptor::interactive(
            "actors-roles",
            walkthrough(
                "13 · Actors & Roles",
                "Who does what",
                &[
                    "User",
                    "Client UI",
                    "Orchestrator",
                    "Emotion Engine",
                    "LLM Server",
                    "Operating System",
                    "Local Storage",
                    "Auth/Security",
                ],
                vec![
                    Step::new(
                        "User-Facing Actors",
                        "The end user works through the client UI: dashboard, chat and settings. The user controls privacy, enables features and gives approvals.",
                        &["User", "Client UI"],
                    ),
                    Step::new(
                        "Core Decision Layer",
                        "The client orchestrator is the decision authority, enforcing permissions, privacy rules and cooldowns, and deciding when to listen, speak or stay quiet.",
                        &["Orchestrator"],
                    ),
                    Step::new(
                        "Context & Intelligence",
                        "The emotion engine adds optional context (camera on, privacy off) while the remote LLM server reasons and proposes actions.",
                        &["Emotion Engine", "LLM Server"],
                    ),
                    Step::new(
                        "Execution & Storage",
                        "The operating system executes approved actions; local storage persists settings, configuration and optional logs with retention control.",
                        &["Operating System", "Local Storage"],
                    ),
                    Step::new(
                        "Security Layer",
                        "Authentication validates client access to the LLM server with API keys and applies rate limiting.",
                        &["Auth/Security"],
                    ),
                    Step::new(
                        "Complete System",
                        "User controls, UI displays, orchestrator decides, LLM reasons, OS executes, storage persists, security guards the server.",
                        &[
                            "User",
                            "Client UI",
                            "Orchestrator",
                            "Emotion Engine",
                            "LLM Server",
                            "Operating System",
                            "Local Storage",
                            "Auth/Security",
                        ],
                    ),
                ],
            ),
        ),
        SlideDescriptor::interactive(
            "sequence-diagram",
            walkthrough(
                "14 · Sequence Diagram",
                "A request, end to end",
                &[
                    "User",
                    "Client UI",
                    "Orchestrator",
                    "Policy Engine",
                    "Context/STT",
                    "LLM Server",
                    "Tool Executor",
                    "Local Storage",
                ],
                vec![
                    Step::new(
                        "Startup & Initialization",
                        "The user launches the app. The UI asks the orchestrator for state; settings, permissions and hotkeys load from storage and background services start.",
                        &["User", "Client UI", "Orchestrator", "Context/STT", "Local Storage"],
                    ),
                    Step::new(
                        "User Sends Request",
                        "The user triggers the assistant via text, voice or hotkey. Voice goes through speech-to-text before the orchestrator processes it.",
                        &["User", "Client UI", "Orchestrator", "Context/STT"],
                    ),
                    Step::new(
                        "Policy Pre-Checks",
                        "Before contacting the LLM the policy engine checks privacy mode, permissions, cooldowns and do-not-disturb; context is built.",
                        &["Orchestrator", "Policy Engine", "Context/STT"],
                    ),
                    Step::new(
                        "LLM Reasoning",
                        "Input, context summary, allowed tools and constraints go to the LLM server over authenticated HTTPS; it returns text and an optional plan.",
                        &["Orchestrator", "LLM Server"],
                    ),
                    Step::new(
                        "Plan Validation",
                        "The policy engine checks the tool allowlist, permissions and privacy constraints, and classifies risk as low or high impact.",
                        &["Orchestrator", "Policy Engine"],
                    ),
                    Step::new(
                        "Tool Execution",
                        "Approved low-impact actions run immediately; high-impact actions need explicit user confirmation first.",
                        &["Orchestrator", "Tool Executor"],
                    ),
                    Step::new(
                        "Response & Logging",
                        "The result reaches the UI, optionally spoken aloud. Session metadata is logged locally when enabled, then the system idles.",
                        &["User", "Client UI", "Orchestrator", "Local Storage"],
                    ),
                    Step::new(
                        "Failure & Fallback Paths",
                        "Server offline, auth failure or tool errors degrade gracefully. Toggling privacy mid-flow discards sensitive context.",
                        &["User", "Client UI", "Orchestrator", "Policy Engine", "LLM Server"],
                    ),
                ],
            ),
        ),
        SlideDescriptor::interactive(
            "activity-diagram",
            walkthrough(
                "15 · Activity Diagram",
                "How AYO spends its time",
                &[
                    "Initialize",
                    "Privacy",
                    "Interact",
                    "Validate",
                    "Execute",
                    "Schedule",
                    "Suggest",
                    "Recover",
                    "Shutdown",
                ],
                vec![
                    Step::new(
                        "System Initialization",
                        "Settings, hotkeys and toggles load; permissions are checked; the server is pinged and background services start in parallel.",
                        &["Initialize"],
                    ),
                    Step::new(
                        "Privacy Mode & Camera Toggle",
                        "The privacy hotkey is the highest-priority interrupt: capture stops, the emotion engine pauses and sensitive data never reaches the LLM.",
                        &["Privacy"],
                    ),
                    Step::new(
                        "Main Interaction Flow",
                        "Text, wake-word or push-to-talk input passes speech-to-text, policy pre-checks and context building before the LLM request.",
                        &["Interact"],
                    ),
                    Step::new(
                        "LLM Response & Plan Validation",
                        "The plan is checked against allowlist, permissions and privacy, then branches into text-only, low-impact or high-impact.",
                        &["Validate"],
                    ),
                    Step::new(
                        "Tool Execution & Confirmation",
                        "Low-impact tools run automatically; high-impact ones wait for the user to confirm or cancel.",
                        &["Execute"],
                    ),
                    Step::new(
                        "Delayed / Scheduled Actions",
                        "Scheduled actions fire from the local scheduler and are re-validated by policy before running.",
                        &["Schedule"],
                    ),
                    Step::new(
                        "Proactive Suggestions",
                        "Triggers from the proactive monitor produce suggestions, respecting cooldowns and do-not-disturb.",
                        &["Suggest"],
                    ),
                    Step::new(
                        "Failure & Edge Cases",
                        "Offline servers, failed auth and tool errors fall back to safe responses without crashing.",
                        &["Recover"],
                    ),
                    Step::new(
                        "Logging & Shutdown",
                        "Session metadata is logged when enabled; on exit every service stops cleanly.",
                        &["Shutdown"],
                    ),
                ],
            ),
        ),
        SlideDescriptor::normal(
            "use-case",
            diagram(
                "16 · Use Cases",
                "Use case diagram",
                "Interactions between the user, the system and external actors.",
                &["User", "Ask Assistant", "Toggle Privacy", "Approve Action", "LLM Server"],
            ),
        )
        .with_auto_advance(DIAGRAM_DWELL),
        SlideDescriptor::normal(
            "class-diagram",
            diagram(
                "17 · Classes",
                "System class structure",
                "Client app, policy engine, orchestrator and LLM client.",
                &["ClientApp", "Orchestrator", "PolicyEngine", "LlmClient", "EmotionEngine"],
            ),
        )
        .with_auto_advance(DIAGRAM_DWELL),
        SlideDescriptor::normal(
            "deployment",
            diagram(
                "18 · Deployment",
                "Physical deployment",
                "All OS actions happen on the client device; the inference server only answers HTTPS requests.",
                &["Client Device", "HTTPS", "LLM Inference Server"],
            ),
        )
        .with_auto_advance(DIAGRAM_DWELL),
        SlideDescriptor::normal(
            "erd",
            diagram(
                "19 · Data Model",
                "Entity relationship diagram",
                "Users, settings, logs and interaction history.",
                &["User", "Settings", "Log", "Interaction"],
            ),
        )
        .with_auto_advance(DIAGRAM_DWELL),
        SlideDescriptor::interactive(
            "state-machine",
            walkthrough(
                "20 · State Machine",
                "Assistant states",
                &[
                    "Closed",
                    "Initializing",
                    "Ready",
                    "Capturing",
                    "Waiting for LLM",
                    "Validate Plan",
                    "Executing",
                    "Scheduled",
                    "Privacy Mode",
                    "Fallback",
                ],
                vec![
                    Step::new(
                        "App Lifecycle",
                        "From closed, AYO initializes (settings, permissions, services) and reaches Ready, where it waits for the user.",
                        &["Closed", "Initializing", "Ready"],
                    ),
                    Step::new(
                        "User Interaction Flow",
                        "Input is captured, transcribed if spoken, pre-checked by policy and turned into context before the LLM request.",
                        &["Ready", "Capturing", "Waiting for LLM"],
                    ),
                    Step::new(
                        "Plan Validation & Execution",
                        "Depending on risk AYO answers in text, runs low-impact tools or asks for confirmation first.",
                        &["Validate Plan", "Executing"],
                    ),
                    Step::new(
                        "Background Intelligence",
                        "From Ready, timers fire scheduled executions and triggers produce proactive suggestions, each re-validated by policy.",
                        &["Ready", "Scheduled"],
                    ),
                    Step::new(
                        "Privacy Override",
                        "The privacy hotkey works from any state, stopping sensitive features at once; disabling it returns to Ready.",
                        &["Privacy Mode", "Ready", "Capturing", "Waiting for LLM"],
                    ),
                    Step::new(
                        "Error Handling & Recovery",
                        "An offline server leads to fallback mode, auth failures to unauthorized; both recover to Ready. Shutdown stops everything.",
                        &["Fallback", "Closed"],
                    ),
                ],
            ),
        ),
        SlideDescriptor::normal(
            "pre-demo",
            bullets(
                "21 · Prototype",
                "Meet the AYO assistant",
                &["Press SPACE to open the live demo"],
            ),
        ),
        SlideDescriptor::demo(
            "demo",
            SlideContent::Demo {
                heading: "Live Demo".to_string(),
                pages: strings(&["Dashboard", "Chat", "Privacy", "Logs", "Settings"]),
            },
        ),
        SlideDescriptor::normal(
            "conclusion",
            SlideContent::Title {
                title: "Conclusion".to_string(),
                subtitle: "AYO: The Future of Privacy-First AI Assistance".to_string(),
                tagline: "Thank you for your attention.".to_string(),
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideKind;

    #[test]
    fn test_deck_builds() {
        let registry = deck().unwrap();
        assert_eq!(registry.count(), 24);
        assert_eq!(registry[0].id(), "title");
        assert_eq!(registry[registry.count() - 1].id(), "conclusion");
    }

    #[test]
    fn test_interactive_step_counts() {
        let registry = deck().unwrap();
        let steps = |id: &str| registry[registry.position_of(id).unwrap()].step_count();
        assert_eq!(steps("actors-roles"), 6);
        assert_eq!(steps("sequence-diagram"), 8);
        assert_eq!(steps("activity-diagram"), 9);
        assert_eq!(steps("state-machine"), 6);
    }

    #[test]
    fn test_single_demo_slide_before_conclusion() {
        let registry = deck().unwrap();
        let demos: Vec<usize> = registry
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind() == SlideKind::Demo)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(demos, vec![registry.count() - 2]);
    }

    #[test]
    fn test_only_overview_diagrams_auto_advance() {
        let registry = deck().unwrap();
        let auto: Vec<&str> = registry
            .iter()
            .filter(|s| s.auto_advance().is_some())
            .map(|s| s.id())
            .collect();
        assert_eq!(auto, vec!["use-case", "class-diagram", "deployment", "erd"]);
    }

    #[test]
    fn test_every_highlight_names_a_node() {
        let registry = deck().unwrap();
        for slide in registry.iter() {
            if let SlideContent::Walkthrough { nodes, steps, .. } = slide.content() {
                for step in steps {
                    for highlight in &step.highlights {
                        assert!(
                            nodes.contains(highlight),
                            "{}: '{}' is not a node",
                            slide.id(),
                            highlight
                        );
                    }
                }
            }
        }
    }
}
