#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded(String), // formatted time
    EntryDeleted,
    EntryNotFound(String), // id
    ConfirmDeleteEntry(String),
    NoEntriesForMonth(String), // month label
    NoEntries,
    HistoryHeader(String), // month label
    HistoryAllHeader,
    InvalidDate(String),
    InvalidMonth(String),
    NoteRefined,
    UseRefinedNote,

    // === EXTRA ACTIVITY MESSAGES ===
    ExtraAdded(String, String), // kind, formatted time
    ExtraDeleted,
    ExtraNotFound(String),
    ConfirmDeleteExtra(String),
    NoExtras,
    ExtrasHeader,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // month label
    GoalProgress { hours: i64, goal: f64, percent: f64 },
    TrendHeader,
    ReminderNudge,

    // === PROFILE MESSAGES ===
    ProfileSaved,
    ProfileHeader,
    ImageSaved(String),   // slot
    ImageCleared(String), // slot
    ImageTooLarge,
    ImageRejected(String),

    // === SHARE MESSAGES ===
    ContactMissing,
    ShareLinkReady(String),
    ShareOpened,
    ShareOpenFailed(String),

    // === TEXT GENERATION MESSAGES ===
    GeneratorNoResult,
    GeneratorNotConfigured,
    InsightsHeader,
    NothingToRefine,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleGenerator,
    ConfigModuleReminder,

    // === DATA MESSAGES ===
    ConfirmReset,
    DataReset,
    StorageCorrupt(String),

    // === PROMPTS ===
    PromptName,
    PromptServiceType,
    PromptGoal,
    PromptContact,
    PromptApiKey,
    PromptApiUrl,
    PromptRefineModel,
    PromptInsightsModel,
    PromptTimeout,
    PromptReminderDay,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
