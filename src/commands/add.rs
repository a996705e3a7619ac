use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{Category, Record};
use crate::store::RecordStore;
use crate::{notify, Result};

/// Creates a record from the validated form fields and appends it to the
/// store. For a Worker Payment, the simulated SMS receipt is part of the
/// output message.
pub fn add(store: &mut RecordStore, args: AddArgs) -> Result<Out<Record>> {
    let id = store.next_id();
    let record = Record::create(id, args.category(), args.amount(), args.person(), args.note());
    let record = store.append(record)?;

    let mut message = format!(
        "Recorded {} of GHS {} (id {})",
        record.category(),
        record.amount(),
        record.id()
    );
    if record.category() == Category::WorkerPayment {
        message.push_str("\n\n");
        message.push_str(&notify::sms_receipt(record.person(), record.amount()));
    }
    Ok(Out::new(message, record.clone()))
}
