/// All user-facing text of the application.
///
/// Variants carry the values that are interpolated into the text; the
/// wording lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TOTAL MESSAGES ===
    TotalHeader,
    TotalHhmm(String),    // hours:minutes
    TotalDecimal(String), // decimal hours
    NoValidEntries,

    // === ENTRY MESSAGES ===
    EntriesHeader,
    EntryExcluded,

    // === FORM MESSAGES ===
    FormTitle,
    FormHint,
    PromptEntry(usize), // 1-based slot number
    PromptSelectAction,
    PromptSelectSlotToRemove,
    SlotLabel(usize, String),    // 1-based slot number, current value
    MenuEditSlot(usize, String), // 1-based slot number, current value
    MenuAddSlot,
    MenuRemoveSlot,
    MenuCalculate,
    MenuClear,
    MenuQuit,
    SlotAdded(usize),             // 1-based slot number
    SlotRemoved(usize),           // 1-based slot number
    SlotCleared(usize),           // 1-based slot number
    SlotFormatted(usize, String), // 1-based slot number, formatted value
    SlotError(String),
    FormCleared(usize), // slot count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigReadFailed(String), // error
    ConfigModuleForm,
    ConfigModuleOutput,
    PromptSelectModules,
    PromptInitialSlots,
    PromptAutoAdvance,
    PromptJsonOutput,
    PromptShowEntries,

    // === DEBUG MESSAGES ===
    DebugModeEnabled(String), // filter
}
