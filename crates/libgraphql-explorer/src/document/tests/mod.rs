mod document_memo_tests;
