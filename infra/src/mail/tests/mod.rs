mod ox_mail_client_tests;
