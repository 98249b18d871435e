pub mod about;
pub mod agent_workspace;
pub mod ai_agents;
pub mod contact;
pub mod home;
pub mod legal;
